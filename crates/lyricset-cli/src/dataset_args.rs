use lyricset::{LyricsDataset, LyricsDatasetOptions};

/// Dataset source and filter arg group.
#[derive(clap::Args, Debug)]
pub struct DatasetArgs {
    /// Path to the lyrics CSV.
    #[arg(long)]
    pub csv_path: String,

    /// Keep only artists with more than this many songs.
    #[arg(long)]
    pub min_song_count: Option<usize>,

    /// Keep only rows crediting one of these artists.
    #[arg(long, num_args = 1..)]
    pub artists: Vec<String>,
}

impl DatasetArgs {
    /// Build the load options.
    pub fn options(&self) -> LyricsDatasetOptions {
        LyricsDatasetOptions::default()
            .with_min_song_count(self.min_song_count)
            .with_artists(Some(self.artists.clone()))
    }

    /// Load the dataset.
    pub fn load(&self) -> Result<LyricsDataset, Box<dyn std::error::Error>> {
        Ok(self.options().load(&self.csv_path)?)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(clap::Parser, Debug)]
    struct TestArgs {
        #[command(flatten)]
        dataset: DatasetArgs,
    }

    #[test]
    fn test_options() {
        let args = TestArgs::parse_from(["test", "--csv-path", "a.csv"]);
        assert_eq!(args.dataset.csv_path, "a.csv");
        assert_eq!(args.dataset.options(), LyricsDatasetOptions::default());

        let args = TestArgs::parse_from([
            "test",
            "--csv-path",
            "a.csv",
            "--min-song-count",
            "3",
            "--artists",
            "X",
            "Y",
        ]);
        let options = args.dataset.options();
        assert_eq!(options.min_song_count, Some(3));
        assert_eq!(
            options.artists,
            Some(vec!["X".to_string(), "Y".to_string()])
        );
    }
}
