use clap::{command, Arg};

#[derive(Debug)]
pub struct CliArgs {
    pub test_num: u32,
    pub results_dir: String,
}

pub fn cli() -> CliArgs {
    let arguments = command!("graph")
        .version("1.0")
        .about("Process test results and print a graph")
        .arg(
            Arg::new("testnum")
                .help("The number of the test (1..3)")
                .long("testnum")
                .short('T')
                .required(true),
        )
        .arg(
            Arg::new("dir")
                .help("The directory with the result files")
                .long("dir")
                .short('D')
                .required(true),
        )
        .get_matches();

    let test_num = match arguments.get_one::<String>("testnum") {
        Some(num) => match num.parse::<u32>() {
            Ok(num @ 1..=3) => num,
            _ => {
                eprintln!("Test number must be 1, 2 or 3.");
                std::process::exit(2);
            }
        },
        None => panic!("Test number is required"),
    };

    let results_dir = match arguments.get_one::<String>("dir") {
        Some(dir) => dir.to_string(),
        None => panic!("Results directory is required"),
    };

    CliArgs {
        test_num,
        results_dir,
    }
}
