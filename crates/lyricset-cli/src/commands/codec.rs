use std::io::{BufRead, Write};

use lyricset::{DEFAULT_PAD_LABEL, Label, label_to_string, pad_sequence, string_to_label};

use crate::input_output::{InputArgs, OutputArgs, write_labels};

/// Args for the encode command.
#[derive(clap::Args, Debug)]
pub struct EncodeArgs {
    /// Pad each line's labels out to this length.
    #[arg(long)]
    max_length: Option<usize>,

    /// The pad label.
    #[arg(long, default_value_t = DEFAULT_PAD_LABEL, allow_hyphen_values = true)]
    pad_label: Label,

    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl EncodeArgs {
    /// Run the encode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_encode(
            &mut reader,
            &mut writer,
            self.max_length.unwrap_or_default(),
            self.pad_label,
        )
    }
}

fn run_encode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
    max_length: usize,
    pad_label: Label,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let labels = pad_sequence(string_to_label(&line?), max_length, pad_label);
        write_labels(writer, &labels)?;
        writeln!(writer)?;
        writer.flush()?;
    }
    Ok(())
}

/// Args for the decode command.
#[derive(clap::Args, Debug)]
pub struct DecodeArgs {
    #[command(flatten)]
    input: InputArgs,

    #[command(flatten)]
    output: OutputArgs,
}

impl DecodeArgs {
    /// Run the decode command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        let mut reader = self.input.open_reader()?;
        let mut writer = self.output.open_writer()?;

        run_decode(&mut reader, &mut writer)
    }
}

fn run_decode(
    reader: &mut dyn BufRead,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    for line in reader.lines() {
        let labels = line?
            .split_whitespace()
            .map(str::parse)
            .collect::<Result<Vec<Label>, _>>()?;

        writeln!(writer, "{}", label_to_string(&labels))?;
        writer.flush()?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_encode() {
        let mut input = "ab\n\u{e9}\n".as_bytes();
        let mut buf: Vec<u8> = Vec::new();
        run_encode(&mut input, &mut buf, 3, DEFAULT_PAD_LABEL).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "10 11 100\n-1 100 100\n");

        let mut input = "abcd\n".as_bytes();
        let mut buf: Vec<u8> = Vec::new();
        run_encode(&mut input, &mut buf, 0, DEFAULT_PAD_LABEL).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "10 11 12 13\n");
    }

    #[test]
    fn test_run_decode() {
        let mut input = "10 11 100\n-1 36 -100\n".as_bytes();
        let mut buf: Vec<u8> = Vec::new();
        run_decode(&mut input, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "ab\nA\n");

        let mut input = "10 x\n".as_bytes();
        let mut buf: Vec<u8> = Vec::new();
        assert!(run_decode(&mut input, &mut buf).is_err());
    }
}
