use std::io::Write;

use lyricset::{EncodedItem, IndexedDataset};

use crate::{
    dataset_args::DatasetArgs,
    input_output::{OutputArgs, write_labels},
};

/// Args for the items command.
#[derive(clap::Args, Debug)]
pub struct ItemsArgs {
    #[command(flatten)]
    dataset: DatasetArgs,

    /// First item index.
    #[arg(long, default_value = "0")]
    start: usize,

    /// Number of items to write; defaults to the rest of the dataset.
    #[arg(long)]
    count: Option<usize>,

    #[command(flatten)]
    output: OutputArgs,
}

impl ItemsArgs {
    /// Run the items command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        log::debug!("loading dataset: {}", self.dataset.csv_path);
        let dataset = self.dataset.load()?;
        log::debug!(
            "writing items from {} (count: {:?}) of {}",
            self.start,
            self.count,
            dataset.len()
        );

        let mut writer = self.output.open_writer()?;

        write_items(&dataset, self.start, self.count, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

/// Write ``index<TAB>length<TAB>input<TAB>target`` lines.
///
/// A `start` past the end writes nothing; an explicit range past the end fails.
fn write_items<D: IndexedDataset<Item = EncodedItem>>(
    dataset: &D,
    start: usize,
    count: Option<usize>,
    writer: &mut dyn Write,
) -> Result<(), Box<dyn std::error::Error>> {
    let end = match count {
        Some(count) => start.saturating_add(count),
        None => dataset.len().max(start),
    };

    for index in start..end {
        let item = dataset.get(index)?;

        write!(writer, "{index}\t{}\t", item.length)?;
        write_labels(writer, &item.input)?;
        write!(writer, "\t")?;
        write_labels(writer, &item.target)?;
        writeln!(writer)?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use lyricset::{LyricRecord, LyricsDatasetOptions, LyricsTable};
    use tempdir::TempDir;

    use super::*;

    fn dataset() -> lyricset::LyricsDataset {
        let table: LyricsTable = ["ab", "abc"]
            .iter()
            .map(|text| LyricRecord {
                text: text.to_string(),
                artist: "X".to_string(),
                artists: None,
            })
            .collect::<Vec<_>>()
            .into();
        LyricsDatasetOptions::default().build(table, "memory.csv")
    }

    #[test]
    fn test_write_items() {
        let dataset = dataset();

        let mut buf: Vec<u8> = Vec::new();
        write_items(&dataset, 0, None, &mut buf).unwrap();
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            "0\t1\t10 100 100\t11 -100 -100\n1\t2\t10 11 100\t11 12 -100\n"
        );

        let mut buf: Vec<u8> = Vec::new();
        write_items(&dataset, 1, Some(1), &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), "1\t2\t10 11 100\t11 12 -100\n");

        let mut buf: Vec<u8> = Vec::new();
        write_items(&dataset, 5, None, &mut buf).unwrap();
        assert!(buf.is_empty());

        let mut buf: Vec<u8> = Vec::new();
        assert!(write_items(&dataset, 1, Some(2), &mut buf).is_err());
    }

    #[test]
    fn test_items_run() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("lyricset-cli-test")?;
        let csv_path = dir.path().join("lyrics.csv");
        fs::write(
            &csv_path,
            "text,artist,artists\nab,X,['X']\nabc,Y,\"['Y', 'Crosby, Stills']\"\nzz,Z,['Z']\n",
        )?;
        let out_path = dir.path().join("items.tsv");

        let args = ItemsArgs {
            dataset: DatasetArgs {
                csv_path: csv_path.to_string_lossy().to_string(),
                min_song_count: None,
                artists: vec!["X".to_string(), "Crosby, Stills".to_string()],
            },
            start: 0,
            count: None,
            output: OutputArgs {
                output: Some(out_path.to_string_lossy().to_string()),
            },
        };
        args.run()?;

        assert_eq!(
            fs::read_to_string(&out_path)?,
            "0\t1\t10 100 100\t11 -100 -100\n1\t2\t10 11 100\t11 12 -100\n"
        );

        Ok(())
    }
}
