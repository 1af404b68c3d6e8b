use crate::catalog::{Record, RecordKey};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum DetailIntent {
    Request(RecordKey),
    Loaded(Record),
    Failed(String),
}

impl Intent for DetailIntent {}
