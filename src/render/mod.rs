mod sql;

pub use sql::{quote, render_insert, InsertStatement};
