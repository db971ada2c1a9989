//! Tests for command-line parsing and per-criterion processing

#[cfg(test)]
mod tests {
    use clap::Parser;
    use peanotree::criteria::CriterionKind;
    use peanotree::io::cli::{Cli, CurveProcessor};
    use peanotree::io::configuration::{
        DEFAULT_DEPTH_CEILING, DEFAULT_FIRST_LEVEL, DEFAULT_MAX_DEPTH, DEFAULT_PARTITIONS,
        DEFAULT_RESOLUTION, DEFAULT_SEED,
    };
    use peanotree::{Motif, PeanoError};
    use std::path::{Path, PathBuf};

    fn quiet_cli(dir: &Path, extra: &[&str]) -> Cli {
        let mut args = vec!["peanotree", dir.to_str().unwrap(), "--quiet"];
        args.extend_from_slice(extra);
        Cli::parse_from(args)
    }

    // Tests CLI parsing with only the output directory
    // Verified by changing the default criterion
    #[test]
    fn test_cli_parse_minimal_args() {
        let cli = Cli::parse_from(["peanotree", "out"]);

        assert_eq!(cli.output_dir, PathBuf::from("out"));
        assert_eq!(cli.criteria, vec![CriterionKind::Sphere]);
        assert_eq!(cli.max_depth, DEFAULT_MAX_DEPTH);
        assert_eq!(cli.partitions, DEFAULT_PARTITIONS);
        assert_eq!(cli.first_level, DEFAULT_FIRST_LEVEL);
        assert_eq!(cli.motif, Motif::P);
        assert_eq!(cli.seed, DEFAULT_SEED);
        assert_eq!(cli.depth_ceiling, DEFAULT_DEPTH_CEILING);
        assert_eq!(cli.resolution, DEFAULT_RESOLUTION);
        assert!(!cli.png);
        assert!(!cli.verify);
        assert!(cli.skip_existing());
        assert!(cli.should_show_progress());
    }

    // Tests CLI parsing with every option
    // Verified by inverting no_skip in skip_existing
    #[test]
    fn test_cli_parse_all_args() {
        let cli = Cli::parse_from([
            "peanotree",
            "out",
            "--criterion",
            "scaling",
            "--criterion",
            "random",
            "--max-depth",
            "5",
            "--partitions",
            "7",
            "--first-level",
            "0",
            "--motif",
            "R",
            "--seed",
            "9",
            "--depth-ceiling",
            "8",
            "--png",
            "--resolution",
            "243",
            "--verify",
            "--quiet",
            "--no-skip",
        ]);

        assert_eq!(
            cli.criteria,
            vec![CriterionKind::Scaling, CriterionKind::Random]
        );
        assert_eq!(cli.max_depth, 5);
        assert_eq!(cli.partitions, 7);
        assert_eq!(cli.motif, Motif::R);
        assert_eq!(cli.seed, 9);
        assert_eq!(cli.depth_ceiling, 8);
        assert_eq!(cli.resolution, 243);
        assert!(cli.png && cli.verify);
        assert!(!cli.skip_existing());
        assert!(!cli.should_show_progress());

        let config = cli.traversal_config();
        assert_eq!(config.motif, Motif::R);
        assert_eq!(config.first_level, 0);
    }

    // Tests short flags and case-insensitive motifs
    // Verified by making motif parsing case sensitive
    #[test]
    fn test_cli_short_flags() {
        let cli = Cli::parse_from([
            "peanotree", "out", "-c", "uniform", "-d", "2", "-p", "3", "-l", "2", "-m", "q",
            "-s", "5", "-r", "81", "-q", "-n",
        ]);

        assert_eq!(cli.criteria, vec![CriterionKind::Uniform]);
        assert_eq!(cli.max_depth, 2);
        assert_eq!(cli.partitions, 3);
        assert_eq!(cli.first_level, 2);
        assert_eq!(cli.motif, Motif::Q);
        assert_eq!(cli.seed, 5);
        assert_eq!(cli.resolution, 81);
    }

    // Tests that unknown criteria are rejected by the parser
    #[test]
    fn test_cli_rejects_unknown_criterion() {
        assert!(Cli::try_parse_from(["peanotree", "out", "-c", "hilbert"]).is_err());
    }

    // Tests duplicate criteria are run once
    // Verified by returning the criteria unchanged
    #[test]
    fn test_unique_criteria() {
        let cli = Cli::parse_from([
            "peanotree", "out", "-c", "sphere", "-c", "uniform", "-c", "sphere",
        ]);

        assert_eq!(
            cli.unique_criteria(),
            vec![CriterionKind::Sphere, CriterionKind::Uniform]
        );
    }

    // Tests a single criterion run end to end without touching the disk
    // Verified by skipping tiling verification with --verify
    #[test]
    fn test_run_criterion() {
        let dir = tempfile::tempdir().unwrap();
        let processor = CurveProcessor::new(quiet_cli(dir.path(), &["--verify"]));

        let result = processor.run_criterion(CriterionKind::Sphere, 0).unwrap();
        assert_eq!(result.leaves.len(), 265);
        assert_eq!(result.partitioning.len(), 265);
        assert_eq!(result.partitioning.parts(), DEFAULT_PARTITIONS);
        assert!(result.tiling.is_some_and(|report| report.is_exact()));
        assert!(result.node_count > result.leaves.len());
    }

    // Tests that processing writes one file per criterion and format
    // Verified by writing the PNG only for the first criterion
    #[test]
    fn test_process_writes_outputs() {
        let dir = tempfile::tempdir().unwrap();
        let cli = quiet_cli(
            dir.path(),
            &["-c", "broadcast", "-c", "enclaves", "--png", "-r", "81"],
        );
        let mut processor = CurveProcessor::new(cli);

        processor.process().unwrap();

        for name in ["broadcast", "enclaves"] {
            assert!(dir.path().join(format!("{name}.tex")).is_file());
            assert!(dir.path().join(format!("{name}.png")).is_file());
        }
        assert_eq!(
            processor.output_path(CriterionKind::Broadcast, "tex"),
            dir.path().join("broadcast.tex")
        );
    }

    // Tests that existing outputs are skipped unless requested
    // Verified by ignoring the skip flag
    #[test]
    fn test_existing_output_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().join("uniform.tex");
        std::fs::write(&existing, "keep").unwrap();

        let mut processor = CurveProcessor::new(quiet_cli(dir.path(), &["-c", "uniform"]));
        processor.process().unwrap();
        assert_eq!(std::fs::read_to_string(&existing).unwrap(), "keep");

        let mut processor =
            CurveProcessor::new(quiet_cli(dir.path(), &["-c", "uniform", "--no-skip"]));
        processor.process().unwrap();
        assert_ne!(std::fs::read_to_string(&existing).unwrap(), "keep");
    }

    // Tests that a newly requested format is written even when other outputs exist
    // Verified by checking only the .tex path before skipping
    #[test]
    fn test_missing_png_is_not_skipped() {
        let dir = tempfile::tempdir().unwrap();

        let mut tikz_only =
            CurveProcessor::new(quiet_cli(dir.path(), &["-c", "uniform", "-d", "1"]));
        tikz_only.process().unwrap();
        assert!(dir.path().join("uniform.tex").is_file());
        assert!(!dir.path().join("uniform.png").exists());

        let mut with_png = CurveProcessor::new(quiet_cli(
            dir.path(),
            &["-c", "uniform", "-d", "1", "--png", "-r", "27"],
        ));
        with_png.process().unwrap();
        assert!(dir.path().join("uniform.png").is_file());

        std::fs::write(dir.path().join("uniform.tex"), "keep").unwrap();
        let mut complete = CurveProcessor::new(quiet_cli(
            dir.path(),
            &["-c", "uniform", "-d", "1", "--png", "-r", "27"],
        ));
        complete.process().unwrap();
        assert_eq!(
            std::fs::read_to_string(dir.path().join("uniform.tex")).unwrap(),
            "keep"
        );
    }

    // Tests rejected argument combinations
    // Verified by removing the partition count check
    #[test]
    fn test_process_rejects_invalid_arguments() {
        let dir = tempfile::tempdir().unwrap();

        let mut zero_parts = CurveProcessor::new(quiet_cli(dir.path(), &["-p", "0"]));
        assert!(matches!(
            zero_parts.process(),
            Err(PeanoError::InvalidParameter {
                parameter: "partitions",
                ..
            })
        ));

        let mut too_deep = CurveProcessor::new(quiet_cli(
            dir.path(),
            &["-d", "9", "--depth-ceiling", "4"],
        ));
        assert!(too_deep.process().is_err());

        let file = dir.path().join("plain.txt");
        std::fs::write(&file, "").unwrap();
        let mut not_a_dir = CurveProcessor::new(quiet_cli(&file, &[]));
        assert!(not_a_dir.process().is_err());
    }
}
