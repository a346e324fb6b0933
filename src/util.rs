/// Splits two strings around their longest common prefix.
///
/// Compares `x` and `y` character by character from the start and returns
/// `(common, x_rest, y_rest)`, all borrowed from the inputs. An empty
/// `common` is the "no collision" sentinel: the strings disagree on their
/// very first character (or one of them is empty). Identical strings leave
/// both rests empty.
///
/// # Examples
///
/// ```
/// use radix_map::left_collision;
///
/// assert_eq!(left_collision("volvo", "audi"), ("", "volvo", "audi"));
/// assert_eq!(left_collision("cars/volvo", "cars/audi"), ("cars/", "volvo", "audi"));
/// assert_eq!(left_collision("cars/volvo", "cars/volvo"), ("cars/volvo", "", ""));
/// ```
pub fn left_collision<'a>(x: &'a str, y: &'a str) -> (&'a str, &'a str, &'a str) {
    let mut split = 0;

    // Matched characters are identical, so `split` lands on a char boundary
    // of both strings.
    for ((i, cx), cy) in x.char_indices().zip(y.chars()) {
        if cx != cy {
            break;
        }
        split = i + cx.len_utf8();
    }

    (&x[..split], &x[split..], &y[split..])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disjoint_strings() {
        assert_eq!(left_collision("volvo", "audi"), ("", "volvo", "audi"));
        assert_eq!(
            left_collision("volvo", "cars/volvo"),
            ("", "volvo", "cars/volvo")
        );
    }

    #[test]
    fn test_partial_overlap() {
        assert_eq!(
            left_collision("cars/volvo", "cars/audi"),
            ("cars/", "volvo", "audi")
        );
        assert_eq!(left_collision("cars/volvo", "cars"), ("cars", "/volvo", ""));
    }

    #[test]
    fn test_identical_strings() {
        assert_eq!(left_collision("cars/volvo", "cars/volvo"), ("cars/volvo", "", ""));
    }

    #[test]
    fn test_empty_strings() {
        assert_eq!(left_collision("", ""), ("", "", ""));
        assert_eq!(left_collision("", "cars"), ("", "", "cars"));
        assert_eq!(left_collision("cars", ""), ("", "cars", ""));
    }

    #[test]
    fn test_multibyte_characters() {
        // The split index must stay on a char boundary in both strings
        assert_eq!(left_collision("größe", "größer"), ("größe", "", "r"));
        assert_eq!(left_collision("日本語", "日本人"), ("日本", "語", "人"));
    }
}
