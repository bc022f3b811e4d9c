pub mod bar;
pub mod html;
pub mod pie;
pub mod svg;

use std::path::Path;

use error_stack::{Result, ResultExt};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Failed to write chart to {0}")]
    FailedToWrite(String),
}

pub trait Chart {
    fn title(&self) -> &str;

    fn render_svg(&self) -> String;

    fn to_html(&self) -> String {
        html::document(self.title(), &self.render_svg())
    }

    fn write_html(&self, path: &Path) -> Result<(), ChartError> {
        std::fs::write(path, self.to_html())
            .change_context_lazy(|| ChartError::FailedToWrite(path.display().to_string()))
    }
}
