use std::time::Instant;

use clap::Arg;
use serde_json::json;

use kempe_color::search::greedy_dsatur::greedy_dsatur;
use kempe_color::search::kempe::kempe_local_search;
use kempe_color::util::{export_results, read_params, solver_app};


/** solves a coloring instance using the DSATUR greedy followed by a
Kempe-chain local search */
pub fn main() {
    // parse arguments
    let main_args = solver_app(
        "kempe_ls",
        "improves a DSATUR coloring using the Kempe-chain local search"
    ).arg(Arg::with_name("iterations")
        .short("n").long("iterations")
        .takes_value(true)
        .help("maximum number of accepted moves (runs to convergence if absent)")
    ).get_matches();
    let max_iter:Option<usize> = main_args.value_of("iterations")
        .map(|v| v.parse::<usize>().expect("unable to parse the number of iterations"));
    let (
        inst_filename,
        instance,
        sol_file,
        perf_file
    ) = read_params(&main_args);

    // compute the initial coloring
    let t_start = Instant::now();
    let greedy_sol = greedy_dsatur(instance.clone(), false);
    println!("greedy found {} colors", greedy_sol.len());

    // improve it
    let solution = kempe_local_search(instance.clone(), &greedy_sol, max_iter, true);
    let duration = t_start.elapsed().as_secs_f32();
    let nb_colors = solution.len();
    println!("Kempe local search took {:.3} seconds. Nb colors: {}", duration, nb_colors);
    let stats = json!({
        "primal_list": vec![greedy_sol.len(), nb_colors],
        "time_searched": duration,
        "inst_name": inst_filename
    });

    // export results
    export_results(instance, &solution, &stats, perf_file, sol_file, true);
}
