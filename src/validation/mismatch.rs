//! Reconciles an abscissa and ordinates of different lengths.
use crate::diagnostics::{EventSink, FitEvent};
use crate::model::{LsmError, MismatchStrategy, Result};

/// Applies `strategy` to a pair of sequences whose lengths differ.
///
/// - `Fail` always rejects with [`LsmError::LengthMismatch`]; callers only
///   invoke the resolver once they have seen the lengths differ.
/// - `Truncate` drops the trailing values of the longer sequence. The
///   surviving prefix keeps its order.
///
/// The returned slices borrow from the inputs; nothing is copied.
pub fn resolve_mismatch<'a>(
    abscissa: &'a [f64],
    ordinates: &'a [f64],
    strategy: MismatchStrategy,
    sink: &dyn EventSink,
) -> Result<(&'a [f64], &'a [f64])> {
    match strategy {
        MismatchStrategy::Fail => {
            sink.record(&FitEvent::MismatchRejected {
                abscissa: abscissa.len(),
                ordinates: ordinates.len(),
                strategy,
            });
            Err(LsmError::LengthMismatch { abscissa: abscissa.len(), ordinates: ordinates.len() })
        }
        MismatchStrategy::Truncate => {
            let len = abscissa.len().min(ordinates.len());
            if abscissa.len() > len {
                sink.record(&FitEvent::Truncated { what: "abscissa", from: abscissa.len(), to: len });
            } else if ordinates.len() > len {
                sink.record(&FitEvent::Truncated { what: "ordinates", from: ordinates.len(), to: len });
            }
            Ok((&abscissa[..len], &ordinates[..len]))
        }
    }
}
