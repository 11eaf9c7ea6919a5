use anyhow::Result;
use datasynth_core::{
    generate, GenerationError, GenerationReport, Generated, RngFactory, SheetWriter,
};
use datasynth_reports::{JsonFormatter, Reporter, StdOutFormatter};
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::{
    constructor::{draw_params, RunSettings},
    output::dataset_path,
    parser::{parse_config, Config},
    Args, ReportFormat,
};

pub fn run(args: Args) -> Result<bool> {
    let config = match &args.config {
        Some(path) => parse_config(std::path::Path::new(path))?,
        None => Config::default(),
    };
    let settings = RunSettings::resolve(&args, config)?;
    let factory = settings
        .seed
        .map(RngFactory::new)
        .unwrap_or_else(RngFactory::from_entropy);

    let version = env!("CARGO_PKG_VERSION").to_string();
    let mut reporter: Box<dyn Reporter> = match args.report {
        ReportFormat::Stdout => Box::new(StdOutFormatter::new(version)),
        ReportFormat::Json => Box::new(JsonFormatter::new(version).with_seed(factory.seed())),
    };

    let results = run_batch(&settings, factory, reporter.as_mut());
    let failed = results.iter().filter(|r| !r.is_passed()).count();
    reporter.on_summary(results.len() - failed, failed);

    Ok(failed == 0)
}

/// Generate and persist every dataset of the batch. A failed run is
/// recorded in its report and does not stop the others.
pub fn run_batch(
    settings: &RunSettings,
    factory: RngFactory,
    reporter: &mut dyn Reporter,
) -> Vec<GenerationReport> {
    reporter.on_start(settings.count, factory.seed());
    let writer = settings.format.writer();

    if settings.parallel {
        let results: Vec<GenerationReport> = (1..=settings.count)
            .into_par_iter()
            .map(|i| generate_one(settings, factory, writer.as_ref(), i))
            .collect();
        for r in &results {
            reporter.on_run_result(r);
        }
        results
    } else {
        (1..=settings.count)
            .map(|i| {
                let r = generate_one(settings, factory, writer.as_ref(), i);
                reporter.on_run_result(&r);
                r
            })
            .collect()
    }
}

fn generate_one(
    settings: &RunSettings,
    factory: RngFactory,
    writer: &dyn SheetWriter,
    run: usize,
) -> GenerationReport {
    let path = dataset_path(&settings.output_folder, run, writer.extension());
    let mut report = GenerationReport::new(
        run,
        settings.shape.to_string(),
        path.display().to_string(),
    );

    let mut rng = factory.stream(run as u64);
    let params = draw_params(settings.shape, &settings.ranges, &mut rng);
    debug!(run, ?params, "drawn parameters");

    let outcome: Result<Generated, GenerationError> = generate(&params, &mut rng)
        .and_then(|generated| writer.write(&generated.table, &path).map(|_| generated));
    match outcome {
        Ok(generated) => report.record(&generated),
        Err(e) => {
            warn!(run, error = %e, "run failed");
            report.set_failed(e.to_string());
        }
    }
    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constructor::validate_ranges;
    use crate::parser::Ranges;
    use datasynth_core::{OutputFormat, Shape};
    use tempfile::TempDir;

    struct Recorder {
        started: usize,
        results: Vec<usize>,
    }

    impl Reporter for Recorder {
        fn on_start(&self, _total: usize, _seed: u64) {}
        fn on_run_result(&mut self, result: &GenerationReport) {
            self.started += 1;
            self.results.push(result.run);
        }
        fn on_summary(&self, _written: usize, _failed: usize) {}
    }

    fn settings(dir: &TempDir, shape: Shape, parallel: bool) -> RunSettings {
        RunSettings {
            count: 4,
            shape,
            output_folder: dir.path().join("batch"),
            format: OutputFormat::Xlsx,
            seed: Some(5),
            parallel,
            ranges: validate_ranges(&Ranges::default()).unwrap(),
        }
    }

    #[test]
    fn test_batch_writes_numbered_files() {
        let dir = TempDir::new().unwrap();
        let s = settings(&dir, Shape::Long, false);
        let mut recorder = Recorder {
            started: 0,
            results: Vec::new(),
        };
        let results = run_batch(&s, RngFactory::new(5), &mut recorder);

        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| r.is_passed()));
        assert_eq!(recorder.results, vec![1, 2, 3, 4]);
        for i in 1..=4 {
            let path = dir.path().join(format!("batch/synthetic_dataset_{}.xlsx", i));
            assert!(path.exists());
        }
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let seq_dir = TempDir::new().unwrap();
        let par_dir = TempDir::new().unwrap();
        let mut recorder = Recorder {
            started: 0,
            results: Vec::new(),
        };
        let seq = run_batch(
            &settings(&seq_dir, Shape::Campaign, false),
            RngFactory::new(5),
            &mut recorder,
        );
        let par = run_batch(
            &settings(&par_dir, Shape::Campaign, true),
            RngFactory::new(5),
            &mut recorder,
        );
        for (a, b) in seq.iter().zip(par.iter()) {
            assert_eq!(a.run, b.run);
            assert_eq!(a.total_rows, b.total_rows);
            assert_eq!(a.total_columns, b.total_columns);
            assert_eq!(a.empty_cells, b.empty_cells);
            assert_eq!(a.wrong_typed, b.wrong_typed);
        }
        assert_eq!(recorder.started, 8);
    }

    #[test]
    fn test_failed_run_does_not_stop_batch() {
        let dir = TempDir::new().unwrap();
        // a plain file where the output folder should be
        let blocker = dir.path().join("batch");
        std::fs::write(&blocker, "not a folder").unwrap();

        let s = settings(&dir, Shape::Wide, false);
        let mut recorder = Recorder {
            started: 0,
            results: Vec::new(),
        };
        let results = run_batch(&s, RngFactory::new(5), &mut recorder);
        assert_eq!(results.len(), 4);
        assert!(results.iter().all(|r| !r.is_passed()));
        assert!(results.iter().all(|r| r.error_message.is_some()));
    }
}
