use std::fs::read_to_string;
use std::process::exit;

use editscript::{diff, from_fn, DiffOperator};

fn main() {
    let args: Vec<_> = std::env::args_os().collect();
    if args.len() != 3 {
        eprintln!("usage: lines [old] [new]");
        exit(1);
    }

    let old = read_to_string(&args[1]).unwrap();
    let new = read_to_string(&args[2]).unwrap();
    let old_lines: Vec<&str> = old.lines().collect();
    let new_lines: Vec<&str> = new.lines().collect();

    let ops = diff(&from_fn(old_lines.len(), new_lines.len(), |i0, i1| {
        old_lines[i0] == new_lines[i1]
    }));

    for op in &ops {
        println!("@@ {} @@", op);
        if op.op == DiffOperator::Unchanged {
            continue;
        }
        for line in &old_lines[op.range0()] {
            println!("-{}", line);
        }
        for line in &new_lines[op.range1()] {
            println!("+{}", line);
        }
    }
}
