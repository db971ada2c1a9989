//! Tests for base-3 linearisation of grid positions

#[cfg(test)]
mod tests {
    use peanotree::PeanoError;
    use peanotree::curve::codec::{GRID_EXTENT, delinearise, linearise, positions};
    use peanotree::spatial::Dimension;

    // Tests the mixed-radix formula on hand-picked positions
    // Verified by swapping the weights of x and y
    #[test]
    fn test_linearise_known_positions() {
        assert_eq!(linearise([0, 0, 0], Dimension::Two).ok(), Some(0));
        assert_eq!(linearise([2, 0, 0], Dimension::Two).ok(), Some(2));
        assert_eq!(linearise([0, 1, 0], Dimension::Two).ok(), Some(3));
        assert_eq!(linearise([2, 2, 0], Dimension::Two).ok(), Some(8));
        assert_eq!(linearise([1, 2, 2], Dimension::Three).ok(), Some(25));
        assert_eq!(linearise([2, 2, 2], Dimension::Three).ok(), Some(26));
    }

    // Tests that the third component is ignored for 2-D grids
    // Verified by keeping z in 2-D
    #[test]
    fn test_linearise_forces_z_to_zero_in_2d() {
        assert_eq!(linearise([1, 1, 2], Dimension::Two).ok(), Some(4));
    }

    // Tests both directions of the bijection over the whole 2-D and 3-D domains
    // Verified by using division instead of remainder in delinearise
    #[test]
    fn test_codec_is_a_bijection() {
        for dimension in [Dimension::Two, Dimension::Three] {
            for index in 0..dimension.child_count() {
                let pos = delinearise(index, dimension).unwrap();
                assert_eq!(linearise(pos, dimension).unwrap(), index);
            }
            for pos in positions(dimension) {
                let index = linearise(pos, dimension).unwrap();
                assert_eq!(delinearise(index, dimension).unwrap(), pos);
            }
        }
    }

    // Tests that positions enumerates every slot once in linear order
    // Verified by iterating x in the outer loop
    #[test]
    fn test_positions_follow_linear_order() {
        let all: Vec<_> = positions(Dimension::Three).collect();
        assert_eq!(all.len(), 27);
        assert_eq!(all.first(), Some(&[0, 0, 0]));
        assert_eq!(all.get(1), Some(&[1, 0, 0]));
        assert_eq!(all.get(3), Some(&[0, 1, 0]));
        assert_eq!(all.get(9), Some(&[0, 0, 1]));
        assert_eq!(all.last(), Some(&[2, 2, 2]));

        assert_eq!(positions(Dimension::Two).count(), 9);
        assert!(positions(Dimension::Two).all(|[_, _, z]| z == 0));
    }

    // Tests domain errors for out-of-range input
    // Verified by using <= in the range check
    #[test]
    fn test_out_of_domain_input_is_rejected() {
        assert!(matches!(
            delinearise(9, Dimension::Two),
            Err(PeanoError::Domain {
                value: 9,
                limit: 9,
                ..
            })
        ));
        assert!(matches!(
            delinearise(27, Dimension::Three),
            Err(PeanoError::Domain { limit: 27, .. })
        ));
        assert!(matches!(
            linearise([GRID_EXTENT, 0, 0], Dimension::Two),
            Err(PeanoError::Domain { value: 3, .. })
        ));
        assert!(linearise([0, 0, 3], Dimension::Three).is_err());
    }
}
