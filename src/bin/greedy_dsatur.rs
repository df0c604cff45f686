use std::time::Instant;

use serde_json::json;

use kempe_color::search::greedy_dsatur::greedy_dsatur;
use kempe_color::util::{export_results, read_params, solver_app};


/** solves a coloring instance using a DSATUR greedy */
pub fn main() {
    // parse arguments
    let main_args = solver_app(
        "greedy_dsatur",
        "computes an initial coloring using the DSATUR greedy"
    ).get_matches();
    let (
        inst_filename,
        instance,
        sol_file,
        perf_file
    ) = read_params(&main_args);

    // solve it
    let t_start = Instant::now();
    let solution = greedy_dsatur(instance.clone(), true);
    let duration = t_start.elapsed().as_secs_f32();
    let nb_colors = solution.len();
    println!("DSATUR took {:.3} seconds. Nb colors: {}", duration, nb_colors);
    let stats = json!({
        "primal_list": vec![nb_colors],
        "time_searched": duration,
        "inst_name": inst_filename
    });

    // export results
    export_results(instance, &solution, &stats, perf_file, sol_file, true);
}
