use smithy_symbols::identity::ShapeId;
use smithy_symbols::model::Model;
use smithy_symbols::reader::{JsonReader, Token, TokenKind};
use smithy_symbols::registry::TraitRegistry;
use smithy_symbols::shapes::{Operation, Shape};
use smithy_symbols::value::Value;

/// A reader stub that yields a single queued token stream, enough to exercise a trait
/// parser without needing the concrete tokenizer (that lives in the downstream JSON
/// crate).
struct FixedReader {
    tokens: Vec<Token>,
    pos: usize,
}

impl FixedReader {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }
}

impl JsonReader for FixedReader {
    fn peek(&mut self) -> smithy_symbols::error::Result<TokenKind> {
        Ok(match &self.tokens[self.pos] {
            Token::ObjectBegin => TokenKind::ObjectBegin,
            Token::ObjectEnd => TokenKind::ObjectEnd,
            Token::ArrayBegin => TokenKind::ArrayBegin,
            Token::ArrayEnd => TokenKind::ArrayEnd,
            Token::String(_) => TokenKind::String,
            Token::Integer(_) | Token::Float(_) => TokenKind::Number,
            Token::Boolean(_) => TokenKind::Boolean,
            Token::Null => TokenKind::Null,
            Token::Eof => TokenKind::Eof,
        })
    }

    fn next(&mut self) -> smithy_symbols::error::Result<Token> {
        let tok = self.tokens[self.pos].clone();
        self.pos += 1;
        Ok(tok)
    }

    fn next_object_begin(&mut self) -> smithy_symbols::error::Result<()> {
        self.next().map(|_| ())
    }

    fn next_object_end(&mut self) -> smithy_symbols::error::Result<()> {
        self.next().map(|_| ())
    }

    fn next_array_begin(&mut self) -> smithy_symbols::error::Result<()> {
        self.next().map(|_| ())
    }

    fn next_array_end(&mut self) -> smithy_symbols::error::Result<()> {
        self.next().map(|_| ())
    }

    fn next_document_end(&mut self) -> smithy_symbols::error::Result<()> {
        Ok(())
    }

    fn next_null(&mut self) -> smithy_symbols::error::Result<()> {
        self.next().map(|_| ())
    }

    fn next_boolean(&mut self) -> smithy_symbols::error::Result<bool> {
        match self.next()? {
            Token::Boolean(b) => Ok(b),
            other => panic!("expected boolean, found {:?}", other),
        }
    }

    fn next_integer(&mut self) -> smithy_symbols::error::Result<i64> {
        match self.next()? {
            Token::Integer(n) => Ok(n),
            other => panic!("expected integer, found {:?}", other),
        }
    }

    fn next_float(&mut self) -> smithy_symbols::error::Result<f64> {
        match self.next()? {
            Token::Float(n) => Ok(n),
            other => panic!("expected float, found {:?}", other),
        }
    }

    fn next_string(&mut self) -> smithy_symbols::error::Result<String> {
        match self.next()? {
            Token::String(s) => Ok(s),
            other => panic!("expected string, found {:?}", other),
        }
    }

    fn skip_value_or_scope(&mut self) -> smithy_symbols::error::Result<()> {
        self.next().map(|_| ())
    }

    fn skip_current_scope(&mut self) -> smithy_symbols::error::Result<()> {
        self.next().map(|_| ())
    }

    fn next_scope(
        &mut self,
        _visitor: &mut smithy_symbols::reader::ScopeVisitor<'_>,
    ) -> smithy_symbols::error::Result<()> {
        unimplemented!("not exercised by this fixture")
    }
}

#[test]
fn compose_matches_member_id_binding() {
    let parent = "example.weather#City";
    let member_id = ShapeId::compose(parent, "cityId");
    assert_eq!(member_id, ShapeId::of(&format!("{}$cityId", parent)));
}

#[test]
fn model_trait_append_preserves_order_and_does_not_dedupe() {
    let mut model = Model::new();
    let shape = ShapeId::of("example.weather#City");
    let documentation = ShapeId::of("smithy.api#documentation");
    let required = ShapeId::of("smithy.api#required");

    model.add_trait(shape, documentation, Some(Value::String("a city".into())));
    model.add_trait(shape, required, None);
    // An `apply` declaration re-adding the same trait id appends rather than replacing.
    model.add_trait(shape, required, None);

    let traits = model.traits(shape);
    assert_eq!(traits.len(), 3);
    assert_eq!(traits[0].0, documentation);
    assert_eq!(traits[1].0, required);
    assert_eq!(traits[2].0, required);
}

#[test]
fn model_reserved_member_names_are_never_set() {
    let mut model = Model::new();
    let list_id = ShapeId::of("example.weather#Cities");
    let member_id = ShapeId::compose("example.weather#Cities", "member");

    model.add_shape(list_id, Shape::List(member_id));
    // A conforming parser simply never calls `set_name` for `member`/`key`/`value`; the
    // store itself places no restriction on it, so this test documents the contract at
    // the call site instead of inside `Model`.
    assert_eq!(model.name(member_id), None);
}

#[test]
fn service_registration_last_service_wins() {
    let mut model = Model::new();
    let first = ShapeId::of("example.weather#Weather");
    let second = ShapeId::of("example.weather#WeatherV2");
    model.set_service_id(first);
    model.set_service_id(second);
    assert_eq!(model.service_id(), second);
}

#[test]
fn operation_shape_round_trips_through_store() {
    let mut model = Model::new();
    let op_id = ShapeId::of("example.weather#GetCurrentTime");
    let op = Operation {
        input: None,
        output: Some(ShapeId::of("example.weather#GetCurrentTimeOutput")),
        errors: vec![ShapeId::of("example.weather#NoSuchResource")],
    };
    model.add_shape(op_id, Shape::Operation(op.clone()));
    match model.shape(op_id) {
        Some(Shape::Operation(stored)) => assert_eq!(stored, &op),
        other => panic!("expected an operation shape, found {:?}", other),
    }
}

#[test]
fn registry_rejects_duplicate_registration() {
    let mut registry = TraitRegistry::empty();
    let id = ShapeId::of("smithy.api#documentation");
    registry.register(id, None).unwrap();
    assert!(registry.register(id, None).is_err());
}

#[test]
fn registry_parses_documentation_trait_payload() {
    let registry = TraitRegistry::with_builtin_traits();
    let id = ShapeId::of("smithy.api#documentation");
    let mut reader = FixedReader::new(vec![Token::String("a city".to_string())]);
    let value = registry.parse(id, &mut reader).unwrap();
    assert_eq!(value, Some(Value::String("a city".to_string())));
}

#[test]
fn registry_skips_tag_trait_body() {
    let registry = TraitRegistry::with_builtin_traits();
    let id = ShapeId::of("smithy.api#required");
    let mut reader = FixedReader::new(vec![Token::ObjectBegin]);
    let value = registry.parse(id, &mut reader).unwrap();
    assert_eq!(value, None);
}

#[test]
fn registry_unknown_trait_is_an_error() {
    let registry = TraitRegistry::with_builtin_traits();
    let id = ShapeId::of("example.weather#customTrait");
    let mut reader = FixedReader::new(vec![Token::Null]);
    assert!(registry.parse(id, &mut reader).is_err());
}
