//! Shared fixtures for unit tests.

/// (scores, labels) pairs with known reference results.
pub fn datasets() -> Vec<(Vec<f64>, Vec<f64>)> {
    vec![
        (vec![0.1, 0.4, 0.35, 0.8], vec![0.0, 0.0, 1.0, 1.0]),
        (
            vec![0.1, 0.4, 0.35, 0.8, 0.85],
            vec![0.0, 0.0, 1.0, 1.0, 0.0],
        ),
        (
            vec![0.02, 0.1, 0.4, 0.35, 0.8, 0.85],
            vec![1.0, 0.0, 0.0, 1.0, 1.0, 0.0],
        ),
        (vec![0.02, 0.1], vec![0.0, 0.0]),
        (
            vec![
                0.001485745854553862,
                0.0014863790364460178,
                0.0014863790364460178,
                0.0014854873139097426,
                0.001485745854553862,
                0.001485745854553862,
                0.0014863790364460178,
                0.0014863790364460178,
                0.001485745854553862,
                0.001485745854553862,
                0.0014863646408943988,
                0.0014857314651254725,
                0.0014857314651254725,
                0.0014857314651254725,
                0.0014863646408943988,
                0.0014857314651254725,
                0.0014863646408943988,
            ],
            vec![0.0; 17],
        ),
    ]
}
