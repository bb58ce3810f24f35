/// Missing integers in the span of a sorted, deduplicated number list.
///
/// Fewer than two distinct numbers give no span to reason about. Otherwise
/// every integer strictly between an adjacent pair is reported, ascending.
/// Pure function; callers guarantee the input is unique and sorted.
pub fn find_gaps(numbers: &[u32]) -> Vec<u32> {
    if numbers.len() < 2 {
        return Vec::new();
    }

    let mut gaps = Vec::new();
    for pair in numbers.windows(2) {
        let (a, b) = (pair[0], pair[1]);
        if b - a > 1 {
            gaps.extend(a + 1..b);
        }
    }
    gaps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reports_all_gaps_in_order() {
        assert_eq!(find_gaps(&[1, 2, 4, 5, 8]), vec![3, 6, 7]);
    }

    #[test]
    fn test_too_few_points() {
        assert_eq!(find_gaps(&[]), Vec::<u32>::new());
        assert_eq!(find_gaps(&[7]), Vec::<u32>::new());
    }

    #[test]
    fn test_contiguous_run_has_no_gaps() {
        assert_eq!(find_gaps(&[1, 2, 3, 4]), Vec::<u32>::new());
    }

    #[test]
    fn test_single_wide_gap() {
        assert_eq!(find_gaps(&[10, 14]), vec![11, 12, 13]);
    }

    #[test]
    fn test_output_disjoint_from_input_and_within_span() {
        let input = [2, 5, 6, 11, 40];
        let gaps = find_gaps(&input);
        let min = *input.first().unwrap();
        let max = *input.last().unwrap();
        for g in &gaps {
            assert!(*g > min && *g < max);
            assert!(!input.contains(g));
        }
        // Everything in the span is either observed or missing.
        assert_eq!(gaps.len() as u32, max - min + 1 - input.len() as u32);
    }
}
