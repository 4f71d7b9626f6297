use clap::{Arg, clap_app};

use topo_count::program_flow::argparse::{extract_max_set_size, MAX_SET_SIZE_ARG};
use topo_count::program_flow::OrExit;
use topo_count::timer::Timer;
use topo_count::topology::{Strategy, topology_counts};

fn main() {
    let mut app = clap_app!(topo_count =>
        (version: "0.1")
        (author: "Aaron Zhou")
        (about: "Counts the topologies on a set of n elements for every n up to the given maximum")
        (@arg parallel: --parallel -p "spread the search for each set size over all cores")
        (@arg timing: --timing -t "print the time spent on each set size")
    );
    app = app.arg(
        Arg::with_name(MAX_SET_SIZE_ARG)
            .long(MAX_SET_SIZE_ARG)
            .takes_value(true)
            .allow_hyphen_values(true)
            .help("required; a non-negative integer, the largest set size to count topologies for")
    );
    let matches = app.get_matches();

    let max_set_size = extract_max_set_size(&matches).unwrap_or_exit();
    let strategy = if matches.is_present("parallel") {
        Strategy::Parallel
    } else {
        Strategy::Sequential
    };

    let counts: Vec<u64> = if matches.is_present("timing") {
        println!("max set size: {}\nstrategy: {:?}", max_set_size, strategy);
        let mut timer = Timer::new();
        (0..=max_set_size)
            .map(|size| {
                let count = strategy.count(size);
                timer.print(&format!("set size {}: {} topologies", size, count));
                count
            })
            .collect()
    } else {
        topology_counts(max_set_size, strategy)
    };
    println!("{:?}", counts);
}
