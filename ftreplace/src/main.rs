use std::ffi::OsString;

use ftreplace::{args, init_tracing, log_filter, report, run, Arguments, FtError, EXIT_ERROR, EXIT_OK};

fn main() {
    let argv: Vec<OsString> = std::env::args_os().collect();

    if Arguments::wants_help(&argv) {
        args::print_usage();
        return;
    }

    let args = match Arguments::parse_from(argv) {
        Ok(args) => args,
        Err(e) => {
            print_error(&e);
            std::process::exit(EXIT_ERROR);
        }
    };

    init_tracing(log_filter(args.debug));

    let result = run(&args);
    let exit_code = match &result {
        Ok(_) => EXIT_OK,
        Err(e) => {
            print_error(e);
            EXIT_ERROR
        }
    };

    if args.debug {
        report::print(&args, result.as_ref().ok(), exit_code);
    }

    std::process::exit(exit_code);
}

fn print_error(e: &FtError) {
    println!("ERROR: {}", e);
    if let Some(cause) = e.cause() {
        println!("  Caused by: {}", cause);
    }
}
