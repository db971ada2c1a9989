//! Tests for cell geometry validation and child subdivision

#[cfg(test)]
mod tests {
    use peanotree::PeanoError;
    use peanotree::spatial::{CellGeometry, Dimension};

    // Tests child offsets and sizes in a 2-D cell
    // Verified by dividing the size by two
    #[test]
    fn test_child_geometry_2d() {
        let cell = CellGeometry::new(vec![3.0, 6.0], vec![3.0, 9.0]).unwrap();

        let child = cell.child([2, 1, 0]);
        assert_eq!(child.offset(), &[5.0, 9.0]);
        assert_eq!(child.size(), &[1.0, 3.0]);

        let origin = cell.child([0, 0, 0]);
        assert_eq!(origin.offset(), cell.offset());
    }

    // Tests that the z component only moves 3-D cells
    // Verified by ignoring z in child offsets
    #[test]
    fn test_child_geometry_3d() {
        let cell = CellGeometry::new(vec![0.0; 3], vec![27.0; 3]).unwrap();
        let child = cell.child([1, 0, 2]);

        assert_eq!(child.offset(), &[9.0, 0.0, 18.0]);
        assert_eq!(child.size(), &[9.0; 3]);
        assert_eq!(child.dimension(), Dimension::Three);
    }

    // Tests centre computation
    // Verified by returning the offset as centre
    #[test]
    fn test_centre_is_midpoint() {
        let cell = CellGeometry::new(vec![0.0, 1.0], vec![3.0, 1.0]).unwrap();
        assert_eq!(cell.centre(), vec![1.5, 1.5]);
    }

    // Tests that single precision cells subdivide the same way
    // Verified by converting through f64 and truncating
    #[test]
    fn test_f32_geometry() {
        let cell = CellGeometry::new(vec![0.0_f32, 0.0], vec![9.0_f32, 9.0]).unwrap();
        let child = cell.child([1, 2, 0]);

        assert_eq!(child.offset(), &[3.0_f32, 6.0]);
        assert_eq!(child.centre(), vec![4.5_f32, 7.5]);
    }

    // Tests half-open containment
    // Verified by using <= on the upper bound
    #[test]
    fn test_contains_is_half_open() {
        let cell = CellGeometry::new(vec![1.0, 1.0], vec![1.0, 1.0]).unwrap();

        assert!(cell.contains(&[1.0, 1.0]));
        assert!(cell.contains(&[1.5, 1.999]));
        assert!(!cell.contains(&[2.0, 1.5]));
        assert!(!cell.contains(&[1.5]));
    }

    // Tests rejected geometries
    // Verified by accepting zero extents
    #[test]
    fn test_invalid_geometry_is_rejected() {
        assert!(matches!(
            CellGeometry::new(vec![0.0, 0.0], vec![1.0, 1.0, 1.0]),
            Err(PeanoError::GeometryMismatch {
                expected: 2,
                found: 3
            })
        ));
        assert!(matches!(
            CellGeometry::new(vec![0.0], vec![1.0]),
            Err(PeanoError::UnsupportedDimension { axes: 1 })
        ));
        assert!(matches!(
            CellGeometry::new(vec![0.0; 4], vec![1.0; 4]),
            Err(PeanoError::UnsupportedDimension { axes: 4 })
        ));
        assert!(CellGeometry::new(vec![0.0, 0.0], vec![1.0, 0.0]).is_err());
        assert!(CellGeometry::new(vec![0.0, 0.0], vec![-1.0, 1.0]).is_err());
        assert!(CellGeometry::new(vec![f64::NAN, 0.0], vec![1.0, 1.0]).is_err());
        assert!(CellGeometry::new(vec![0.0, 0.0], vec![f64::INFINITY, 1.0]).is_err());
    }

    // Tests that validation errors report the offending value and axis
    // Verified by reporting the axis index as the value
    #[test]
    fn test_invalid_geometry_reports_value() {
        match CellGeometry::new(vec![0.0, 0.0], vec![1.0, -2.5]) {
            Err(PeanoError::InvalidParameter {
                parameter,
                value,
                reason,
            }) => {
                assert_eq!(parameter, "size");
                assert_eq!(value, "-2.5");
                assert!(reason.contains("axis 1"));
            }
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }

        match CellGeometry::new(vec![f64::INFINITY, 0.0], vec![1.0, 1.0]) {
            Err(PeanoError::InvalidParameter {
                parameter, reason, ..
            }) => {
                assert_eq!(parameter, "offset");
                assert!(reason.contains("axis 0"));
            }
            other => unreachable!("Expected InvalidParameter, got {other:?}"),
        }
    }

    // Tests dimension conversion and slot counts
    // Verified by mapping 3 to Dimension::Two
    #[test]
    fn test_dimension_conversion() {
        assert_eq!(Dimension::try_from(2).ok(), Some(Dimension::Two));
        assert_eq!(Dimension::try_from(3).ok(), Some(Dimension::Three));
        assert!(Dimension::try_from(0).is_err());

        assert_eq!(Dimension::Two.axes(), 2);
        assert_eq!(Dimension::Two.child_count(), 9);
        assert_eq!(Dimension::Three.child_count(), 27);
    }
}
