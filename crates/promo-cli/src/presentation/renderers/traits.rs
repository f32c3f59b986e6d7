use anyhow::Result;
use serde::Serialize;
use std::fmt::Display;

use crate::presentation::view_models::CommandOutput;

pub trait Renderer {
    fn render<T>(&self, result: CommandOutput<T>) -> Result<()>
    where
        T: Serialize + Display;
}
