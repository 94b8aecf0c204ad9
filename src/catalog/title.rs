/// Convert a base name into a display title.
///
/// - `SienaGreen` -> `Siena Green`
/// - `Red_White_Blue` -> `Red White Blue`
///
/// A space goes in at every ASCII lowercase-to-uppercase transition and each underscore
/// becomes one space. Names without such transitions only get underscores replaced.
pub fn friendly_title(base_name: &str) -> String {
    let mut title = String::with_capacity(base_name.len() + 8);
    let mut prev: Option<char> = None;

    for c in base_name.chars() {
        if c == '_' {
            title.push(' ');
        } else {
            if c.is_ascii_uppercase() && prev.is_some_and(|p| p.is_ascii_lowercase()) {
                title.push(' ');
            }
            title.push(c);
        }
        prev = Some(c);
    }

    title.trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_split() {
        assert_eq!(friendly_title("SienaGreen"), "Siena Green");
        assert_eq!(friendly_title("RedWhiteBlue"), "Red White Blue");
    }

    #[test]
    fn test_underscores_become_single_spaces() {
        assert_eq!(friendly_title("Red_White"), "Red White");
        assert_eq!(friendly_title("Red__White"), "Red  White");
        assert_eq!(friendly_title("_Red_"), "Red");
    }

    #[test]
    fn test_uniform_case_unchanged() {
        assert_eq!(friendly_title("GOLD"), "GOLD");
        assert_eq!(friendly_title("gold"), "gold");
        assert_eq!(friendly_title("GOLD_rush"), "GOLD rush");
    }

    #[test]
    fn test_capital_run_splits_once() {
        assert_eq!(friendly_title("greenUSA"), "green USA");
        assert_eq!(friendly_title("USAgreen"), "USAgreen");
    }

    #[test]
    fn test_mixed_conventions() {
        assert_eq!(friendly_title("SienaGreen_Gold"), "Siena Green Gold");
        assert_eq!(friendly_title("Red.v2"), "Red.v2");
    }
}
