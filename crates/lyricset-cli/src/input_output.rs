use std::{
    fs::File,
    io::{BufRead, BufReader, BufWriter, Write},
};

/// "-" is an alias for stdin/stdout.
fn file_path(path: &Option<String>) -> Option<&str> {
    path.as_deref().filter(|p| *p != "-")
}

/// Input argument group.
#[derive(clap::Args, Debug)]
pub struct InputArgs {
    /// Optional input file; "-" may be used to indicate stdin.
    #[clap(long, default_value = None)]
    pub input: Option<String>,
}

impl InputArgs {
    /// Open a reader for the input.
    pub fn open_reader(&self) -> Result<Box<dyn BufRead>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.input) {
            Some(p) => Box::new(BufReader::new(File::open(p)?)),
            None => Box::new(BufReader::new(std::io::stdin().lock())),
        })
    }
}

/// Output argument group.
#[derive(clap::Args, Debug)]
pub struct OutputArgs {
    /// Optional output file; "-" may be used to indicate stdout.
    #[clap(long, default_value = None)]
    pub output: Option<String>,
}

impl OutputArgs {
    /// Open a writer for the output.
    pub fn open_writer(&self) -> Result<Box<dyn Write>, Box<dyn std::error::Error>> {
        Ok(match file_path(&self.output) {
            Some(p) => Box::new(BufWriter::new(File::create(p)?)),
            None => Box::new(BufWriter::new(std::io::stdout().lock())),
        })
    }
}

/// Write labels as a space-separated line fragment.
pub fn write_labels(
    writer: &mut dyn Write,
    labels: &[lyricset::Label],
) -> std::io::Result<()> {
    for (idx, label) in labels.iter().enumerate() {
        write!(writer, "{}{}", if idx == 0 { "" } else { " " }, label)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_file_path() {
        assert_eq!(file_path(&None), None);
        assert_eq!(file_path(&Some("-".to_string())), None);
        assert_eq!(file_path(&Some("a.csv".to_string())), Some("a.csv"));
    }

    #[test]
    fn test_write_labels() {
        let mut buf: Vec<u8> = Vec::new();
        write_labels(&mut buf, &[10, -1, 100]).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "10 -1 100");

        let mut buf: Vec<u8> = Vec::new();
        write_labels(&mut buf, &[]).unwrap();
        assert!(buf.is_empty());
    }
}
