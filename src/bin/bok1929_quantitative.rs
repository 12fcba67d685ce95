use std::error::Error;
use std::fs::create_dir_all;

use clap::Parser;

use bok1929::cli::QuantitativeArgs;
use bok1929::logging;
use bok1929::paper::run_scatter_set;

fn main() -> Result<(), Box<dyn Error>> {
    let args = QuantitativeArgs::parse();
    logging::init(args.common.debug);

    let cfg = args.load_config();
    cfg.validate()?;
    let out_dir = cfg.output.dir.as_path();
    create_dir_all(out_dir)?;

    for kind in args.sets() {
        let set = kind.figure_set();
        run_scatter_set(&set, &cfg.quantitative.data_dir, out_dir, &cfg.quantitative)?;
    }

    println!("Saved strip plots to {}", out_dir.display());
    Ok(())
}
