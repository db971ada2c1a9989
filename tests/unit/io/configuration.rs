//! Tests for domain constants and configuration defaults

#[cfg(test)]
mod tests {
    use peanotree::io::configuration::{
        DEFAULT_DEPTH_CEILING, DEFAULT_FIRST_LEVEL, DEFAULT_MAX_DEPTH, DEFAULT_PARTITIONS,
        DEFAULT_RESOLUTION, DOMAIN_OFFSET, DOMAIN_SIZE, MAX_RESOLUTION, PARTITION_PALETTE,
        RANDOM_REFINEMENT_PROBABILITY, SPHERE_RADIUS,
    };
    use std::collections::HashSet;

    // Tests the reference domain is the 3x3 square at the origin
    // Verified by moving the domain origin
    #[test]
    fn test_reference_domain() {
        assert_eq!(DOMAIN_OFFSET, [0.0, 0.0]);
        assert_eq!(DOMAIN_SIZE, [3.0, 3.0]);
        assert_eq!(SPHERE_RADIUS, 0.99);
    }

    // Tests default refinement settings
    // Verified by changing the default depth
    #[test]
    fn test_refinement_defaults() {
        assert_eq!(DEFAULT_MAX_DEPTH, 3);
        assert_eq!(DEFAULT_FIRST_LEVEL, 1);
        assert_eq!(DEFAULT_PARTITIONS, 4);
        assert_eq!(DEFAULT_DEPTH_CEILING, 12);
        assert_eq!(RANDOM_REFINEMENT_PROBABILITY, 0.5);
    }

    // Tests the default resolution is a power of three
    // Verified by setting the resolution to 1000
    #[test]
    fn test_resolution_defaults() {
        assert_eq!(DEFAULT_RESOLUTION, 3_u32.pow(6));
        assert_eq!(MAX_RESOLUTION, 8192);
    }

    // Tests neighbouring partitions get distinct colors
    #[test]
    fn test_palette_is_distinct() {
        let unique: HashSet<_> = PARTITION_PALETTE.iter().collect();
        assert_eq!(unique.len(), PARTITION_PALETTE.len());
    }
}
