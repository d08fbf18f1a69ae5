#![allow(dead_code)]

pub mod generator;
pub mod history;
pub mod metadata;
pub mod speech;
pub mod transcripts;
pub mod translator;
