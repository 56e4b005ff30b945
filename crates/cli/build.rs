use std::{env, fs, path::PathBuf};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=OUT_DIR");

    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    let completions_dir = out_dir.join("completions");

    fs::create_dir_all(&completions_dir).unwrap();

    let mut cmd = clap::Command::new("excerpo")
        .version("1.0.0")
        .author("Excerpo Contributors")
        .about("Extract post records from archived feed snapshots")
        .arg(clap::arg!(<DIR> "Directory of snapshot .html files"))
        .arg(
            clap::arg!(-o --output <FILE> "Output JSON file")
                .value_name("FILE")
                .value_parser(clap::value_parser!(std::path::PathBuf)),
        )
        .arg(clap::arg!(--window_size <NUM> "Capacity of the recent-posts dedup window").default_value("20"))
        .arg(clap::arg!(--start_date <DATE> "First capture date recorded in the export metadata"))
        .arg(clap::arg!(--end_date <DATE> "Last capture date recorded in the export metadata"))
        .arg(clap::arg!(-v --verbose "Enable progress logging"));

    clap_complete::generate_to(clap_complete::shells::Bash, &mut cmd, "excerpo", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Zsh, &mut cmd, "excerpo", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::Fish, &mut cmd, "excerpo", &completions_dir).unwrap();
    clap_complete::generate_to(clap_complete::shells::PowerShell, &mut cmd, "excerpo", &completions_dir).unwrap();
}
