//! Metrics annotations
//!
//! Builds the fixed block of four regression-quality annotations (MAE, MSE,
//! explained variance, R²) stacked below an anchor point in paper-relative
//! coordinates.

use crate::error::Result;
use crate::metrics;
use plotly::layout::Annotation;

/// Vertical step between stacked annotation lines, in paper units
const LINE_STEP: f64 = 0.05;

/// Annotations reporting the fit quality of `y_pred` against `y_true`
///
/// Returns exactly four paper-anchored annotations at `(x, y)`,
/// `(x, y-0.05)`, `(x, y-0.10)` and `(x, y-0.15)`, in the fixed order
/// MAE, MSE, explained variance, R². Length-mismatched or empty inputs
/// propagate the metrics error.
pub fn annotate_metrics(
    y_true: &[f64],
    y_pred: &[f64],
    x: f64,
    y: f64,
) -> Result<Vec<Annotation>> {
    let mae = metrics::mean_absolute_error(y_true, y_pred)?;
    let mse = metrics::mean_squared_error(y_true, y_pred)?;
    let evs = metrics::explained_variance_score(y_true, y_pred)?;
    let r2 = metrics::r2_score(y_true, y_pred)?;

    Ok(vec![
        paper_annotation(x, y, format!("Mean absolute error: {mae:.3e}")),
        paper_annotation(x, y - LINE_STEP, format!("Mean square error: {mse:.3e}")),
        paper_annotation(
            x,
            y - 2.0 * LINE_STEP,
            format!("Explained variance score: {evs:.3}"),
        ),
        paper_annotation(
            x,
            y - 3.0 * LINE_STEP,
            format!("r<sup>2</sup> score: {r2:.3}"),
        ),
    ])
}

fn paper_annotation(x: f64, y: f64, text: String) -> Annotation {
    Annotation::new()
        .x(x)
        .y(y)
        .x_ref("paper")
        .y_ref("paper")
        .show_arrow(false)
        .text(&text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn to_json(annotations: &[Annotation]) -> Vec<Value> {
        annotations
            .iter()
            .map(|a| serde_json::to_value(a).unwrap())
            .collect()
    }

    #[test]
    fn test_four_annotations_stacked() {
        let y_true = [1.0, 2.0, 3.0, 4.0];
        let y_pred = [1.1, 1.9, 3.2, 3.8];
        let annotations = annotate_metrics(&y_true, &y_pred, 0.1, 0.9).unwrap();
        assert_eq!(annotations.len(), 4);

        let json = to_json(&annotations);
        let ys: Vec<f64> = json.iter().map(|a| a["y"].as_f64().unwrap()).collect();
        assert!((ys[0] - 0.9).abs() < 1e-12);
        assert!((ys[1] - 0.85).abs() < 1e-12);
        assert!((ys[2] - 0.8).abs() < 1e-12);
        assert!((ys[3] - 0.75).abs() < 1e-12);

        for a in &json {
            assert_eq!(a["x"], 0.1);
            assert_eq!(a["xref"], "paper");
            assert_eq!(a["yref"], "paper");
            assert_eq!(a["showarrow"], false);
        }
    }

    #[test]
    fn test_fixed_metric_order() {
        let y = [1.0, 2.0, 3.0];
        let annotations = annotate_metrics(&y, &y, 0.0, 1.0).unwrap();
        let json = to_json(&annotations);
        let texts: Vec<&str> = json.iter().map(|a| a["text"].as_str().unwrap()).collect();

        assert!(texts[0].starts_with("Mean absolute error:"));
        assert!(texts[1].starts_with("Mean square error:"));
        assert!(texts[2].starts_with("Explained variance score:"));
        assert!(texts[3].starts_with("r<sup>2</sup> score:"));
    }

    #[test]
    fn test_perfect_fit_values() {
        let y = [1.0, 2.0, 3.0];
        let annotations = annotate_metrics(&y, &y, 0.0, 1.0).unwrap();
        let json = to_json(&annotations);
        let texts: Vec<&str> = json.iter().map(|a| a["text"].as_str().unwrap()).collect();

        assert_eq!(texts[2], "Explained variance score: 1.000");
        assert_eq!(texts[3], "r<sup>2</sup> score: 1.000");
    }

    #[test]
    fn test_mismatched_inputs_propagate() {
        assert!(annotate_metrics(&[1.0, 2.0], &[1.0], 0.0, 1.0).is_err());
    }
}
