/*!
Each function returns the raw JSON text of a small, complete fixture document.
*/

pub mod message_of_the_day;

pub mod endpoint_rules;
