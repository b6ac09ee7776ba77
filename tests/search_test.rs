// Noncescan - Free and Open Source Software Statement
//
// This project, noncescan, is Free and Open Source Software (FOSS) licensed
// under the MIT License. You are free to use, modify, and distribute this
// software in accordance with the license terms. Contributions are welcome
// via pull requests to the project repository.
//
// File: tests/search_test.rs
// Version: 1.0.2
//
// This file contains integration tests for the search runner in noncescan,
// located in the tests directory. It runs short end-to-end searches against
// easy and unsatisfiable targets and checks the JSON run report.

#[cfg(test)]
mod tests {
    use noncescan::core::compact::hash_meets_target;
    use noncescan::core::sha256::{NONCE_OFFSET, sha256d_hash};
    use noncescan::core::types::{NonceResult, SearchJob};
    use noncescan::search::runner::{SearchOutcome, SearchRunner};
    use noncescan::search::timer::{TimeMark, elapsed_nanos};
    use std::io::Read;
    use std::time::Duration;

    #[tokio::test]
    async fn test_easy_target_search_finds_nonce() {
        // Exponent 32, mantissa ff ff ff: nearly every hash satisfies.
        let job = SearchJob::from_bits([0u8; 80], 0x20ffffff).unwrap();
        let runner = SearchRunner::new(job.clone(), 2, 0, Some(Duration::from_secs(30)));

        let outcome = runner.run().await.unwrap();

        assert!(outcome.result.found, "an easy target should be satisfied quickly");
        assert!(outcome.total_hashes > 0, "hashes must be counted");
        assert!(outcome.elapsed_nanos > 0, "elapsed time must be measured");

        // Re-derive the hash from the reported nonce and check it independently.
        let mut header = job.header;
        header[NONCE_OFFSET..NONCE_OFFSET + 4]
            .copy_from_slice(&outcome.result.nonce.to_le_bytes());
        let hash = sha256d_hash(&header);
        assert_eq!(outcome.result.hash, Some(hash), "reported hash must match the nonce");
        assert!(hash_meets_target(&hash, &job.target), "reported nonce must satisfy the target");
    }

    #[tokio::test]
    async fn test_unsatisfiable_target_hits_deadline() {
        // Exponent 3, mantissa 00 00 01: target is 1, no SHA256d output meets it.
        let job = SearchJob::from_bits([7u8; 80], 0x03000001).unwrap();
        let runner = SearchRunner::new(job, 2, 0, Some(Duration::from_secs(1)));

        let outcome = runner.run().await.unwrap();

        assert!(!outcome.result.found, "nothing should satisfy a target of 1");
        assert_eq!(outcome.result.nonce, 0, "the sink keeps its initialized nonce");
        assert!(outcome.result.hash.is_none());
        assert!(outcome.total_hashes > 0, "threads should have been hashing until the deadline");
    }

    #[test]
    fn test_invalid_bits_rejected_before_spawning() {
        assert!(
            SearchJob::from_bits([0u8; 80], 0x00ffffff).is_err(),
            "exponent 0 must fail job construction"
        );
        assert!(
            SearchJob::from_bits([0u8; 80], 0x21000001).is_err(),
            "exponent 33 must fail job construction"
        );
    }

    #[test]
    fn test_report_serialization() {
        let job = SearchJob::from_bits([0u8; 80], 0x1d00ffff).unwrap();
        let outcome = SearchOutcome {
            result: NonceResult {
                found: true,
                nonce: 0x7c2bac1d,
                hash: Some([0x11; 32]),
            },
            total_hashes: 1_000_000,
            elapsed_nanos: 2_500_000_000,
            hashrate: 400_000.0,
            peak_hashrate: 450_000.0,
            thread_count: 4,
        };

        let report = outcome.to_report(&job);
        assert_eq!(report.bits, "1d00ffff");
        assert_eq!(report.difficulty, 1.0);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        serde_json::to_writer_pretty(&mut file, &report).unwrap();

        let mut contents = String::new();
        file.reopen().unwrap().read_to_string(&mut contents).unwrap();
        let value: serde_json::Value = serde_json::from_str(&contents).unwrap();

        assert_eq!(value["bits"], "1d00ffff");
        assert_eq!(value["found"], true);
        assert_eq!(value["total_hashes"], 1_000_000);
        assert_eq!(value["elapsed_nanos"], 2_500_000_000u64);
        assert_eq!(value["threads"], 4);
        assert_eq!(value["target"].as_str().unwrap().len(), 64);
    }

    #[test]
    fn test_time_marks_are_ordered() {
        let start = TimeMark::now();
        let end = TimeMark::now();
        assert!(elapsed_nanos(start, end) < 1_000_000_000, "two adjacent marks are close");
        assert_eq!(elapsed_nanos(end, start), 0, "reversed marks saturate to zero");
    }
}
