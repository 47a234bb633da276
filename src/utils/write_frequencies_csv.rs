use crate::types::TokenFrequencyMap;
use crate::utils::most_common_tokens;
use crate::Error;
use csv::Writer;
use std::io::Write;
use std::path::Path;

/// Writes every entry of the map as `token,count` rows, most frequent first.
pub fn write_frequencies_csv<W: Write>(
    writer: W,
    frequencies: &TokenFrequencyMap,
) -> Result<(), Error> {
    let mut csv_writer = Writer::from_writer(writer);
    csv_writer.write_record(["token", "count"])?;

    for (token, frequency) in most_common_tokens(frequencies, frequencies.len()) {
        csv_writer.write_record([token, frequency.to_string()])?;
    }

    csv_writer.flush()?;

    Ok(())
}

pub fn write_frequencies_csv_file(
    path: &Path,
    frequencies: &TokenFrequencyMap,
) -> Result<(), Error> {
    let file = std::fs::File::create(path)?;
    write_frequencies_csv(file, frequencies)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_header_and_sorted_rows() {
        let frequencies: TokenFrequencyMap = [("love", 1), ("게임", 3), ("game", 2)]
            .iter()
            .map(|(token, frequency)| (token.to_string(), *frequency))
            .collect();

        let mut buffer = Vec::new();
        write_frequencies_csv(&mut buffer, &frequencies).unwrap();

        assert_eq!(
            String::from_utf8(buffer).unwrap(),
            "token,count\n게임,3\ngame,2\nlove,1\n"
        );
    }
}
