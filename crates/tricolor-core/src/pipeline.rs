use tracing::{debug, info};

use crate::align::align_channels;
use crate::channel_set::{ChannelSet, SearchState};
use crate::composite::{
    AlignedBlendCompositor, CompositeImage, Compositor, LinearBlendCompositor,
    MaskOverlayCompositor,
};
use crate::diff::difference;
use crate::error::Result;
use crate::filter::{Filter, REFERENCE_FILTER};
use crate::manifest::Manifest;
use crate::plane::ChannelPlane;

/// Where the driver sends composites, diagnostic planes, and the updated
/// manifest. File naming, format, and location are the implementor's
/// concern; the driver only hands over logical output names.
pub trait ObservationSink {
    fn write_composite(&mut self, name: &str, image: &CompositeImage) -> Result<()>;

    fn write_diagnostic(&mut self, name: &str, plane: &ChannelPlane) -> Result<()>;

    fn persist_manifest(&mut self, manifest: &Manifest) -> Result<()>;
}

/// Summary of one observation's run, handed back to the caller.
#[derive(Clone, Debug)]
pub struct ObservationReport {
    /// Whether a search round ran in this invocation.
    pub aligned: bool,
    pub state: SearchState,
    /// Logical names of the composite outputs, in emission order.
    pub outputs: Vec<String>,
}

/// Drive one observation through load → (align) → composite → persist.
///
/// The channel set is already validated (all three filters, identical
/// bounds). The search runs only when `requested_radius` exceeds the radius
/// recorded in the manifest; unaligned diagnostics are always emitted before
/// the post-search ones so the two can be compared. The aligned blend runs
/// whenever this set carries search results, from this round or a previous
/// persisted one. Nothing is written if any step fails: errors abort this
/// observation only.
pub fn process_observation(
    set: &ChannelSet,
    manifest: &Manifest,
    requested_radius: u32,
    sink: &mut dyn ObservationSink,
) -> Result<ObservationReport> {
    let mut current = set.clone();
    let mut aligned = false;
    let mut state = current.search_state(manifest.max_offset);
    let mut updated_manifest = None;

    if requested_radius > manifest.max_offset {
        info!(
            radius = requested_radius,
            previous = manifest.max_offset,
            "search window widened, aligning"
        );
        emit_diagnostics(&current, sink)?;

        let outcome = align_channels(&current, requested_radius);
        current = outcome.set;
        state = SearchState {
            max_radius: requested_radius.max(manifest.max_offset),
            ..outcome.state
        };
        aligned = true;

        emit_diagnostics(&current, sink)?;
        updated_manifest = Some(manifest.with_search_state(&state));
    } else {
        debug!(
            radius = requested_radius,
            previous = manifest.max_offset,
            "radius already explored, skipping search"
        );
    }

    let mut compositors: Vec<Box<dyn Compositor>> = vec![
        Box::new(MaskOverlayCompositor::order_bgr()),
        Box::new(MaskOverlayCompositor::order_rgb()),
        Box::new(LinearBlendCompositor),
    ];
    if aligned || manifest.max_offset > 0 {
        compositors.push(Box::new(AlignedBlendCompositor));
    }

    let mut outputs = Vec::with_capacity(compositors.len());
    for compositor in &compositors {
        let image = compositor.composite(&current);
        sink.write_composite(compositor.name(), &image)?;
        outputs.push(compositor.name().to_string());
    }

    if let Some(manifest) = updated_manifest {
        sink.persist_manifest(&manifest)?;
    }

    Ok(ObservationReport {
        aligned,
        state,
        outputs,
    })
}

/// Emit blue-green and blue-red delta planes at the set's current offsets.
fn emit_diagnostics(set: &ChannelSet, sink: &mut dyn ObservationSink) -> Result<()> {
    for (filter, tag) in [(Filter::Green, "bg"), (Filter::Red, "br")] {
        let offset = set.offset(filter);
        let (diag, score) = difference(set.plane(REFERENCE_FILTER), set.plane(filter), offset);
        debug!(pair = tag, offset = %offset, score, "channel difference");
        sink.write_diagnostic(&format!("v3_{}_align_{}_{}", tag, offset.x, offset.y), &diag)?;
    }
    Ok(())
}
