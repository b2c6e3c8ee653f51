use std::fs::File;
use std::io::BufWriter;
use std::io::Write;
use std::path::PathBuf;

fn main() {
    let output_path = PathBuf::from_iter([std::env::var("OUT_DIR").unwrap(), "lut.rs".into()]);
    let mut output_file = BufWriter::new(
        File::options()
            .write(true)
            .create(true)
            .truncate(true)
            .open(output_path)
            .unwrap(),
    );

    output_file
        .write_all("pub const DECIMAL_U8: &[&str; 256] = &[\n".as_bytes())
        .unwrap();

    // Every id a pg_byte can hold, so rendering never formats integers.
    for id in 0..=0xff {
        output_file
            .write_all(format!("\"{id}\",").as_bytes())
            .unwrap();
    }
    output_file.write_all("];\n".as_bytes()).unwrap();

    println!("cargo:rerun-if-changed=build.rs");
}
