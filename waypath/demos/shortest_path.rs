use waypath::{algo::shortest_path, core::Graph};

fn main() {
    let mut graph = Graph::new();

    for city in [
        "Prague",
        "Bratislava",
        "Vienna",
        "Munich",
        "Nuremberg",
        "Florence",
        "Rome",
    ] {
        graph.add_vertex(city).unwrap();
    }

    for (u, v, km) in [
        ("Prague", "Bratislava", 328u32),
        ("Prague", "Nuremberg", 297),
        ("Prague", "Vienna", 293),
        ("Bratislava", "Vienna", 79),
        ("Nuremberg", "Munich", 170),
        ("Vienna", "Munich", 402),
        ("Vienna", "Florence", 863),
        ("Munich", "Florence", 646),
        ("Florence", "Rome", 278),
    ] {
        graph.add_undirected_edge(u, v, km).unwrap();
    }

    // Unreachable is not an error, so the distance is optional.
    let result = shortest_path(&graph, "Prague", "Rome").unwrap();
    let distance = result.distance().copied().unwrap_or_default();
    let path = result.path().unwrap_or_default().join(" - ");

    println!("{distance} km from Prague to Rome through {path}");
    // 1391 km from Prague to Rome through Prague - Nuremberg - Munich - Florence - Rome
}
