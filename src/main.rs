use std::error::Error;
use std::fs;
use std::path::Path;

use glob::glob;

use bench_graph::{cli, meta, parse, plot};

fn main() -> Result<(), Box<dyn Error>> {
    let arguments = cli::cli();

    let pattern = format!("{}/*.txt", arguments.results_dir);
    let mut all_series = Vec::new();
    let mut last_meta = None;

    for entry in glob(&pattern)? {
        let path = entry?;
        let filename = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or("Invalid file name")?;
        let file_meta = meta::parse_filename_meta(filename)?;
        let series = parse::parse(path.to_str().ok_or("Invalid path")?)?;

        last_meta = Some(file_meta.clone());
        all_series.push(plot::PlotSeries {
            meta: file_meta,
            series,
        });
    }

    let last_meta =
        last_meta.ok_or_else(|| format!("No .txt result files in {}", arguments.results_dir))?;

    // Graphs go next to the results directory, not inside it.
    let graphs_dir = Path::new(&arguments.results_dir).join("..");
    fs::create_dir_all(&graphs_dir)?;

    let title = last_meta.title(arguments.test_num);
    let output_path = plot::output_file(&graphs_dir, arguments.test_num, &last_meta);
    plot::render(
        &all_series,
        arguments.test_num,
        &title,
        output_path.to_str().ok_or("Invalid path")?,
    )?;

    println!("Wrote {}", output_path.display());
    Ok(())
}
