use tl_model::{ResidentInterval, Result, TimelineError, YearRange};

/// Decade-rounded bounds over every resident given, across all buildings.
///
/// Fails with [`TimelineError::EmptyRange`] when `residents` is empty.
pub fn compute_year_range<'a, I>(residents: I) -> Result<YearRange>
where
    I: IntoIterator<Item = &'a ResidentInterval>,
{
    let (min, max) = residents
        .into_iter()
        .fold(None, |acc: Option<(i32, i32)>, resident| {
            Some(match acc {
                None => (resident.start_year, resident.end_year),
                Some((min, max)) => (min.min(resident.start_year), max.max(resident.end_year)),
            })
        })
        .ok_or(TimelineError::EmptyRange)?;

    Ok(YearRange::from_extrema(min, max))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_rounds_to_decades() {
        let residents = [
            ResidentInterval::new("A", 1907, 1920, ""),
            ResidentInterval::new("B", 1915, 1943, ""),
        ];
        let range = compute_year_range(&residents).unwrap();
        assert_eq!(range, YearRange { min: 1900, max: 1950 });
    }

    #[test]
    fn test_range_uses_true_extrema() {
        // The latest end need not belong to the latest start.
        let residents = [
            ResidentInterval::new("A", 1850, 1999, ""),
            ResidentInterval::new("B", 1990, 1991, ""),
        ];
        let range = compute_year_range(&residents).unwrap();
        assert_eq!(range, YearRange { min: 1850, max: 2000 });
    }

    #[test]
    fn test_empty_range_fails() {
        let residents: Vec<ResidentInterval> = Vec::new();
        assert_eq!(
            compute_year_range(&residents),
            Err(TimelineError::EmptyRange)
        );
    }
}
