//! Integration tests for the pipeline stages on files written to disk

#[cfg(test)]
mod tests {
    use super::super::fixtures::{mapped, temp_dir, write_bed, write_indexed_bam};
    use extract_amplicon_core::{
        AlignedRead, AmpliconInterval, Error, PrimerQuery, SubstringMatch, bed_records,
        fetch_amplicon_reads, find_amplicon, indexed_bam_reader, trim_reads,
    };
    use indoc::indoc;
    use std::fs;

    const QUERY: PrimerQuery<'static> = PrimerQuery {
        amplicon: "AMP1",
        fwd_suffix: "_LEFT",
        rev_suffix: "_RIGHT",
    };

    #[test]
    fn amplicon_is_located_from_bed_file() {
        let dir = temp_dir();
        let bed_path = write_bed(
            &dir,
            indoc! {"
                track name=primers
                # scheme v1
                chr1\t100\t120\tAMP1_LEFT\t1\t+
                chr1\t380\t400\tAMP1_RIGHT\t1\t-
                chr1\t600\t620\tAMP2_LEFT\t2\t+
            "},
        );

        let amplicon =
            find_amplicon(bed_records(&bed_path).expect("no error"), &QUERY, &SubstringMatch)
                .expect("no error");
        assert_eq!(
            amplicon,
            AmpliconInterval::new("chr1".to_string(), 100, 400).expect("valid")
        );

        fs::remove_dir_all(&dir).expect("no error");
    }

    #[test]
    fn spanning_read_is_fetched_and_trimmed_to_amplicon() {
        let dir = temp_dir();
        let original = mapped("spans", 0, 90, 320);
        let original_seq = original.seq().as_bytes();
        let original_qual = original.qual().to_vec();
        let bam_path = write_indexed_bam(
            &dir,
            &[
                mapped("before", 0, 10, 50),
                original,
                mapped("inside", 0, 150, 100),
            ],
        );
        let amplicon = AmpliconInterval::new("chr1".to_string(), 100, 400).expect("valid");

        let mut reader = indexed_bam_reader(&bam_path).expect("no error");
        let reads = fetch_amplicon_reads(&mut reader, &amplicon).expect("no error");
        assert_eq!(
            reads.iter().map(AlignedRead::read_id).collect::<Vec<_>>(),
            vec!["spans", "inside"]
        );

        let reads = trim_reads(reads, &amplicon).expect("no error");
        let spans = reads.first().expect("two reads");
        assert_eq!(spans.span(), 100..400);
        assert!(spans.is_trimmed());
        assert_eq!(spans.seq(), original_seq.get(10..310).expect("in range"));
        assert_eq!(
            spans.qual(),
            Some(original_qual.get(10..310).expect("in range"))
        );

        let inside = reads.last().expect("two reads");
        assert_eq!(inside.span(), 150..250);
        assert!(!inside.is_trimmed());

        fs::remove_dir_all(&dir).expect("no error");
    }

    #[test]
    fn trimmed_record_carries_new_start_and_sequence() {
        let dir = temp_dir();
        let bam_path = write_indexed_bam(&dir, &[mapped("straddles_end", 0, 350, 100)]);
        let amplicon = AmpliconInterval::new("chr1".to_string(), 100, 400).expect("valid");

        let mut reader = indexed_bam_reader(&bam_path).expect("no error");
        let reads = fetch_amplicon_reads(&mut reader, &amplicon).expect("no error");
        let mut reads = trim_reads(reads, &amplicon).expect("no error");
        let read = reads.pop().expect("one read");
        assert_eq!(read.span(), 350..400);

        let record = read.into_record().expect("no error");
        assert_eq!(record.qname(), b"straddles_end");
        assert_eq!(record.pos(), 350);
        assert_eq!(record.seq_len(), 50);
        assert_eq!(record.qual().len(), 50);
        assert_eq!(record.tid(), 0);

        fs::remove_dir_all(&dir).expect("no error");
    }

    #[test]
    fn fetch_fails_for_contig_absent_from_bam() {
        let dir = temp_dir();
        let bam_path = write_indexed_bam(&dir, &[mapped("inside", 0, 150, 100)]);
        let amplicon = AmpliconInterval::new("chrX".to_string(), 100, 400).expect("valid");

        let mut reader = indexed_bam_reader(&bam_path).expect("no error");
        let err = fetch_amplicon_reads(&mut reader, &amplicon).unwrap_err();
        assert!(matches!(err, Error::ContigNotFound(v) if v == "chrX"));

        fs::remove_dir_all(&dir).expect("no error");
    }

    #[test]
    fn fetch_is_limited_to_amplicon_contig() {
        let dir = temp_dir();
        let bam_path = write_indexed_bam(
            &dir,
            &[mapped("chr1_read", 0, 150, 100), mapped("chr2_read", 1, 150, 100)],
        );
        let amplicon = AmpliconInterval::new("chr2".to_string(), 100, 400).expect("valid");

        let mut reader = indexed_bam_reader(&bam_path).expect("no error");
        let reads = fetch_amplicon_reads(&mut reader, &amplicon).expect("no error");
        assert_eq!(
            reads.iter().map(AlignedRead::read_id).collect::<Vec<_>>(),
            vec!["chr2_read"]
        );

        fs::remove_dir_all(&dir).expect("no error");
    }
}
