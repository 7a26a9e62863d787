//! Bridge between the traversal and the external renderer.

use cellax_model::{Location, Rendering, TransformationRule};
use cellax_sheet::DataSource;
use tracing::{debug, trace};

use crate::collect::ResultCollector;
use crate::error::{EngineError, RenderError, Result};
use crate::log::RenderLog;

/// Evaluates a rule's expression at the data source's current location.
pub trait Renderer {
    fn render(
        &mut self,
        rule: &TransformationRule,
        source: &dyn DataSource,
    ) -> std::result::Result<Vec<Rendering>, RenderError>;
}

/// Evaluate `rule` at `location`: position the source, render, collect, log.
///
/// Returns how many renderings the renderer produced. A render failure is
/// returned as [`EngineError::Render`] and nothing is collected or logged for
/// that location.
pub fn evaluate(
    rule: &TransformationRule,
    location: &Location,
    source: &mut dyn DataSource,
    renderer: &mut dyn Renderer,
    collector: &mut ResultCollector,
    log: &mut dyn RenderLog,
) -> Result<usize> {
    source.set_current_location(location.clone());
    let renderings = renderer
        .render(rule, source)
        .map_err(|error| EngineError::Render {
            rule: rule.to_string(),
            location: location.clone(),
            source: error,
        })?;
    log.record(rule, location, &renderings);
    let produced = renderings.len();
    let inserted = collector.add(renderings);
    if produced > 0 {
        debug!(location = %location, produced, inserted, "rendered");
    } else {
        trace!(location = %location, "nothing rendered");
    }
    Ok(produced)
}
