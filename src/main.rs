use colored::Colorize;
use std::error::Error;
use std::io;
use vlsm_planner::input::{prompt_base_network, prompt_continue, prompt_requirements};
use vlsm_planner::output::{export_csv, print_banner, print_plan, DEFAULT_EXPORT_FILE};
use vlsm_planner::{plan, sorted_descending};

fn main() -> Result<(), Box<dyn Error>> {
    // Do as little as possible in main.rs as it can't contain any tests
    log4rs::init_file("log4rs.yml", Default::default()).expect("Error initializing log4rs");
    log::info!("#Start main()");

    let stdin = io::stdin();
    let mut input = stdin.lock();
    loop {
        print_banner();
        let base = prompt_base_network(&mut input)?;
        let requirements = sorted_descending(prompt_requirements(&mut input)?);
        let result = plan(base, &requirements)?;
        print_plan(&result);

        if !result.assignments.is_empty() {
            export_csv(&result, DEFAULT_EXPORT_FILE)?;
            println!(
                "{}",
                format!("Results exported to {}", DEFAULT_EXPORT_FILE).green()
            );
        }

        if !prompt_continue(&mut input)? {
            println!("{}", "Thanks for using the VLSM planner!".green());
            break;
        }
    }
    Ok(())
}
