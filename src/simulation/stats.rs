/// population mean
pub fn mean(xs: &[f64]) -> f64 {
    assert!(!xs.is_empty(), "mean of nothing");
    xs.iter().sum::<f64>() / xs.len() as f64
}

/// population standard deviation, not the n-1 sample estimator
pub fn stddev(xs: &[f64]) -> f64 {
    let mu = mean(xs);
    (xs.iter().map(|x| (x - mu).powi(2)).sum::<f64>() / xs.len() as f64).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn textbook_spread() {
        let xs = [2., 4., 4., 4., 5., 5., 7., 9.];
        assert!(mean(&xs) == 5.0);
        assert!(stddev(&xs) == 2.0);
    }

    #[test]
    fn constant_samples_have_no_spread() {
        let xs = [350., 350., 350.];
        assert!(mean(&xs) == 350.0);
        assert!(stddev(&xs) == 0.0);
    }

    #[test]
    fn a_single_sample_is_its_own_mean() {
        assert!(mean(&[7.]) == 7.0);
        assert!(stddev(&[7.]) == 0.0);
    }
}
