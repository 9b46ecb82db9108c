use cplan_derive::cplan_error;
use std::borrow::Cow;

#[cplan_error]
#[derive(Debug)]
pub enum DemoError {
    #[error("Missing{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn main() {}
