/// One decimal place, as every report figure is shown
pub fn one_decimal(value: f64) -> String {
    format!("{:.1}", value)
}

pub fn percent(value: f64) -> String {
    format!("{:.1}%", value)
}

pub fn hours(value: f64) -> String {
    format!("{:.1}h", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_formats() {
        assert_eq!(one_decimal(46.547), "46.5");
        assert_eq!(percent(50.0), "50.0%");
        assert_eq!(hours(28.0), "28.0h");
    }
}
