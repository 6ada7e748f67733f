//! Evaluation metrics for binary classifiers.

/// Fraction of predictions equal to their labels.
///
/// Returns 0.0 for empty input.
pub fn accuracy(predictions: &[u8], labels: &[u8]) -> f64 {
    if predictions.is_empty() || predictions.len() != labels.len() {
        return 0.0;
    }
    let correct = predictions
        .iter()
        .zip(labels)
        .filter(|(p, l)| p == l)
        .count();
    correct as f64 / labels.len() as f64
}

/// ROC-AUC via the Wilcoxon-Mann-Whitney rank statistic.
///
/// Returns 0.5 when either class is absent or the input is empty.
pub fn roc_auc(scores: &[f64], labels: &[u8]) -> f64 {
    if scores.is_empty() || scores.len() != labels.len() {
        return 0.5;
    }

    let n_pos = labels.iter().filter(|&&l| l == 1).count();
    let n_neg = labels.len() - n_pos;
    if n_pos == 0 || n_neg == 0 {
        return 0.5;
    }

    // Sort by score descending; each negative then contributes the number
    // of positives ranked above it.
    let mut pairs: Vec<(f64, u8)> = scores
        .iter()
        .zip(labels)
        .map(|(&s, &l)| (s, l))
        .collect();
    pairs.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(std::cmp::Ordering::Equal));

    let mut auc = 0.0;
    let mut positives_seen = 0usize;
    for (_, label) in pairs {
        if label == 1 {
            positives_seen += 1;
        } else {
            auc += positives_seen as f64;
        }
    }

    auc / (n_pos as f64 * n_neg as f64)
}

/// Mean binary cross-entropy of predicted probabilities.
///
/// Probabilities are clamped away from 0 and 1 before taking logs. Returns
/// 0.0 for empty input.
pub fn log_loss(probabilities: &[f64], labels: &[u8]) -> f64 {
    if probabilities.is_empty() || probabilities.len() != labels.len() {
        return 0.0;
    }

    const EPS: f64 = 1e-15;
    let total: f64 = probabilities
        .iter()
        .zip(labels)
        .map(|(&p, &l)| {
            let p = p.clamp(EPS, 1.0 - EPS);
            if l == 1 { -p.ln() } else { -(1.0 - p).ln() }
        })
        .sum();
    total / labels.len() as f64
}
