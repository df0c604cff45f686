use std::rc::Rc;

use clap::{App, Arg, ArgMatches};
use serde_json::Value;

use crate::{
    color::{checker, CheckerResult, ColoringInstance, VertexId},
    dimacs::DimacsInstance,
};

/** builds the argument parser shared by the solver programs
(instance file, optional solution file, optional performance-stats file). */
pub fn solver_app(name:&'static str, about:&'static str) -> App<'static,'static> {
    App::new(name)
        .about(about)
        .arg(Arg::with_name("instance")
            .short("i").long("instance")
            .takes_value(true).required(true)
            .help("DIMACS instance file"))
        .arg(Arg::with_name("solution")
            .short("s").long("solution")
            .takes_value(true)
            .help("file in which the solution is written"))
        .arg(Arg::with_name("perf")
            .short("p").long("perf")
            .takes_value(true)
            .help("file in which performance statistics are written"))
}

/** reads command line input and returns the instance name, instance,
solution filename, stats filename */
pub fn read_params(main_args:&ArgMatches)
-> (String, Rc<dyn ColoringInstance>, Option<String>, Option<String>) {
    let inst_filename = main_args.value_of("instance").unwrap();
    // read value of the solution filename
    let sol_file: Option<String> = match main_args.value_of("solution") {
        None => None,
        Some(e) => {
            println!("printing solutions in: {}", e);
            Some(e.to_string())
        }
    };
    // read value of the performance logs filename
    let perf_file: Option<String> = match main_args.value_of("perf") {
        None => None,
        Some(e) => {
            println!("printing perfs in: {}\n", e);
            Some(e.to_string())
        }
    };
    // read instance file
    let instance:Rc<dyn ColoringInstance> = Rc::new(DimacsInstance::from_file(inst_filename));
    instance.display_statistics();
    println!("=======================");
    (inst_filename.to_string(), instance, sol_file, perf_file)
}

/// exports search results to files
pub fn export_results(
    instance:Rc<dyn ColoringInstance>,
    solution:&[Vec<VertexId>],
    stats:&Value,
    perf_file:Option<String>,
    sol_file:Option<String>,
    check_result:bool,
) {
    // export statistics
    match perf_file {
        None => {},
        Some(filename) => {
            let mut file = match std::fs::File::create(filename.as_str()) {
                Err(why) => panic!("couldn't create {}: {}", filename, why),
                Ok(file) => file
            };
            if let Err(why) = std::io::Write::write(
                &mut file, serde_json::to_string(stats).unwrap().as_bytes()
            ) { panic!("couldn't write: {}", why) };
        }
    }
    // export solution
    match sol_file {
        None => {},
        Some(filename) => {
            if check_result {
                let checker_result = checker(instance.clone(), solution);
                match checker_result {
                    CheckerResult::Ok(_) => {},
                    _ => { println!("invalid solution (reason: {:?})", checker_result) }
                };
            }
            instance.write_solution(filename.as_str(), solution);
        }
    }
}
