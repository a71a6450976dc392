/// Benchmark runner for module loading.
///
/// Compares importing every module up front against binding lazy proxies
/// and touching only a few of them.

extern crate lazyimport;

use lazyimport::{AttributeSource, ImportConfig, Importer, LazyNamespace, ModuleName};
use std::fs;
use std::path::Path;
use std::time::{Duration, Instant};

/// A module with some weight to its body.
fn module_source(index: usize, defs: usize) -> String {
    let mut source = format!("__version__ = \"{}.0\"\n", index);
    for i in 0..defs {
        source.push_str(&format!("def f{}(x) = x\n", i));
        source.push_str(&format!("class C{} {{ def echo(self, x) = x }}\n", i));
        source.push_str(&format!("value{} = str({})\n", i, i));
    }
    source
}

fn write_modules(dir: &Path, count: usize, defs: usize) {
    for i in 0..count {
        fs::write(dir.join(format!("mod{}.lmod", i)), module_source(i, defs))
            .expect("Failed to write benchmark module");
    }
}

fn new_importer(dir: &Path) -> Importer {
    let config = ImportConfig {
        include_cwd: false,
        ..ImportConfig::default()
    }
    .with_search_dir(dir);
    Importer::from_config(&config)
}

/// Import every module, then read `used` of them.
fn run_eager(dir: &Path, count: usize, used: usize, iterations: u32) -> Duration {
    let start = Instant::now();
    for _ in 0..iterations {
        let mut importer = new_importer(dir);
        let modules: Vec<_> = (0..count)
            .map(|i| {
                importer
                    .import_module(&ModuleName::new(format!("mod{}", i)))
                    .expect("Eager import failed")
            })
            .collect();
        for module in modules.iter().take(used) {
            module.get_attr("__version__").expect("Missing __version__");
        }
    }
    start.elapsed()
}

/// Bind a proxy per module, then read `used` of them.
fn run_lazy(dir: &Path, count: usize, used: usize, iterations: u32) -> Duration {
    let start = Instant::now();
    for _ in 0..iterations {
        let importer = new_importer(dir).into_shared();
        let mut libs = LazyNamespace::with_importer("Bench", importer);
        for i in 0..count {
            libs = libs.with_lib(format!("m{}", i), format!("mod{}", i));
        }
        for i in 0..used {
            libs.get_attr(&format!("m{}", i), "__version__")
                .expect("Lazy read failed");
        }
    }
    start.elapsed()
}

fn main() {
    println!("=======================================================");
    println!("  lazyimport - Module Loading Benchmarks");
    println!("  Eager import vs lazy proxies");
    println!("=======================================================\n");

    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let count = 50;
    write_modules(dir.path(), count, 20);

    let scenarios: Vec<(&str, usize, u32)> = vec![
        ("Use none", 0, 20),
        ("Use 1 of 50", 1, 20),
        ("Use 10 of 50", 10, 20),
        ("Use all 50", 50, 20),
    ];

    println!("{:<20} {:>14} {:>14} {:>10}", "Scenario", "Eager", "Lazy", "Speedup");
    println!("{}", "-".repeat(60));

    for (name, used, iterations) in &scenarios {
        let eager = run_eager(dir.path(), count, *used, *iterations);
        let lazy = run_lazy(dir.path(), count, *used, *iterations);
        let speedup = eager.as_secs_f64() / lazy.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<20} {:>12.2?} {:>12.2?} {:>9.1}x",
            name,
            eager / *iterations,
            lazy / *iterations,
            speedup
        );
    }
}
