use std::error::Error;
use std::fs::create_dir_all;

use clap::Parser;

use bok1929::cli::QualitativeArgs;
use bok1929::data::FoldObservationTable;
use bok1929::logging;
use bok1929::paper::run_fold_chart;

fn main() -> Result<(), Box<dyn Error>> {
    let args = QualitativeArgs::parse();
    logging::init(args.common.debug);

    let cfg = args.common.load_config();
    cfg.validate()?;
    let out_dir = cfg.output.dir.as_path();
    create_dir_all(out_dir)?;

    for fold in args.folds() {
        let table = FoldObservationTable::for_fold(fold);
        run_fold_chart(&table, out_dir, &cfg.qualitative)?;
    }

    println!("Saved stacked bar charts to {}", out_dir.display());
    Ok(())
}
