use std::io::Write;

use lyricset::LyricsDataset;

use crate::{dataset_args::DatasetArgs, input_output::OutputArgs};

/// Args for the summary command.
#[derive(clap::Args, Debug)]
pub struct SummaryArgs {
    #[command(flatten)]
    dataset: DatasetArgs,

    /// Also list the distinct artists.
    #[arg(long)]
    list_artists: bool,

    #[command(flatten)]
    output: OutputArgs,
}

impl SummaryArgs {
    /// Run the summary command.
    pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
        log::debug!("loading dataset: {}", self.dataset.csv_path);
        let dataset = self.dataset.load()?;

        let mut writer = self.output.open_writer()?;
        write_summary(&dataset, self.list_artists, &mut writer)?;
        writer.flush()?;

        Ok(())
    }
}

fn write_summary(
    dataset: &LyricsDataset,
    list_artists: bool,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    writeln!(writer, "{}", dataset.summary())?;

    if list_artists {
        for artist in dataset.artists_list() {
            writeln!(writer, "  * {artist}")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempdir::TempDir;

    use super::*;

    #[test]
    fn test_summary_run() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("lyricset-cli-test")?;
        let csv_path = dir.path().join("lyrics.csv");
        fs::write(&csv_path, "text,artist\nab,X\nabc,Y\nabcd,Y\n")?;
        let out_path = dir.path().join("summary.txt");

        let args = SummaryArgs {
            dataset: DatasetArgs {
                csv_path: csv_path.to_string_lossy().to_string(),
                min_song_count: Some(1),
                artists: vec![],
            },
            list_artists: true,
            output: OutputArgs {
                output: Some(out_path.to_string_lossy().to_string()),
            },
        };
        args.run()?;

        let expected = format!(
            "Lyrics Dataset\n  CSV File      : {}\n  Dataset Length: 2\n  Total Artists : 1\n  Max Text Len  : 4\n  * Y\n",
            csv_path.display()
        );
        assert_eq!(fs::read_to_string(&out_path)?, expected);

        Ok(())
    }

    #[test]
    fn test_summary_run_missing_file() -> Result<(), Box<dyn std::error::Error>> {
        let dir = TempDir::new("lyricset-cli-test")?;

        let args = SummaryArgs {
            dataset: DatasetArgs {
                csv_path: dir.path().join("missing.csv").to_string_lossy().to_string(),
                min_song_count: None,
                artists: vec![],
            },
            list_artists: false,
            output: OutputArgs {
                output: Some(dir.path().join("out.txt").to_string_lossy().to_string()),
            },
        };
        assert!(args.run().is_err());

        Ok(())
    }
}
