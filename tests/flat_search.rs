//! Flat scan driver validation and oracle equivalence.

use knnscan::{inner_product, l2_sqr, Id, Knn, KnnScanError, Metric};

fn make_base(n: usize, dim: usize) -> Vec<f32> {
    let mut data = Vec::with_capacity(n * dim);
    for i in 0..n {
        for d in 0..dim {
            let value = (((i * 13) ^ (d * 7) ^ (i * d)) % 251) as f32;
            data.push(value / 251.0 - 0.5);
        }
    }
    data
}

#[test]
fn new_rejects_degenerate_configurations() {
    let err = Knn::new(0, 5, Metric::L2).err().unwrap();
    assert_eq!(err, KnnScanError::InvalidDimension { dim: 0 });

    let err = Knn::new(8, 0, Metric::L2).err().unwrap();
    assert_eq!(err, KnnScanError::InvalidK { k: 0 });
}

#[test]
fn search_rejects_mismatched_buffers() {
    let knn = Knn::new(4, 3, Metric::L2).unwrap();
    let base = make_base(10, 4);
    let mut distances = [0.0f32; 3];
    let mut ids = [0 as Id; 3];

    let err = knn
        .search(&[0.0; 5], &base, &mut distances, &mut ids)
        .err()
        .unwrap();
    assert_eq!(err, KnnScanError::DimensionMismatch { expected: 4, got: 5 });

    let err = knn
        .search(&[0.0; 4], &base[..7], &mut distances, &mut ids)
        .err()
        .unwrap();
    assert_eq!(err, KnnScanError::RaggedBuffer { len: 7, dim: 4 });

    let err = knn
        .search(&[0.0; 4], &base, &mut distances[..2], &mut ids)
        .err()
        .unwrap();
    assert_eq!(err, KnnScanError::BufferTooSmall { needed: 3, got: 2 });

    let err = knn
        .search(&[0.0; 4], &base, &mut distances, &mut ids[..1])
        .err()
        .unwrap();
    assert_eq!(err, KnnScanError::BufferTooSmall { needed: 3, got: 1 });
}

#[test]
fn l2_search_matches_sort_oracle() {
    let n = 200;
    let dim = 8;
    let k = 10;
    let base = make_base(n, dim);
    let query = &base[5 * dim..6 * dim];

    let knn = Knn::new(dim, k, Metric::L2).unwrap();
    let mut distances = vec![0.0f32; k];
    let mut ids = vec![0 as Id; k];
    let nres = knn.search(query, &base, &mut distances, &mut ids).unwrap();
    assert_eq!(nres, k);

    let mut oracle: Vec<(f32, Id)> = base
        .chunks_exact(dim)
        .enumerate()
        .map(|(i, vec)| (l2_sqr(query, vec), i as Id))
        .collect();
    oracle.sort_by(|a, b| a.0.total_cmp(&b.0));

    // The query is row 5 of the corpus, so the best distance is exactly 0.
    assert_eq!(distances[0], 0.0);
    assert_eq!(ids[0], 5);
    for i in 0..k {
        assert_eq!(distances[i], oracle[i].0);
    }
    for i in 1..k {
        assert!(distances[i - 1] <= distances[i]);
    }
}

#[test]
fn inner_product_search_returns_descending_true_scores() {
    let n = 150;
    let dim = 6;
    let k = 7;
    let base = make_base(n, dim);
    let query = &base[3 * dim..4 * dim];

    let knn = Knn::new(dim, k, Metric::InnerProduct).unwrap();
    let mut distances = vec![0.0f32; k];
    let mut ids = vec![0 as Id; k];
    let nres = knn.search(query, &base, &mut distances, &mut ids).unwrap();
    assert_eq!(nres, k);

    let mut oracle: Vec<(f32, Id)> = base
        .chunks_exact(dim)
        .enumerate()
        .map(|(i, vec)| (inner_product(query, vec), i as Id))
        .collect();
    oracle.sort_by(|a, b| b.0.total_cmp(&a.0));

    for i in 0..k {
        assert_eq!(distances[i], oracle[i].0);
    }
    for i in 1..k {
        assert!(distances[i - 1] >= distances[i]);
    }
}

#[test]
fn corpus_shorter_than_k_returns_everything() {
    let dim = 4;
    let base = make_base(3, dim);
    let knn = Knn::new(dim, 5, Metric::L2).unwrap();
    let mut distances = vec![0.0f32; 5];
    let mut ids = vec![0 as Id; 5];

    let nres = knn
        .search(&[0.1, 0.2, 0.3, 0.4], &base, &mut distances, &mut ids)
        .unwrap();
    assert_eq!(nres, 3);
    for i in 1..nres {
        assert!(distances[i - 1] <= distances[i]);
    }
    let mut seen = ids[..nres].to_vec();
    seen.sort_unstable();
    assert_eq!(seen, [0, 1, 2]);
}

#[test]
fn empty_corpus_returns_no_results() {
    let knn = Knn::new(4, 2, Metric::L2).unwrap();
    let mut distances = [0.0f32; 2];
    let mut ids = [0 as Id; 2];

    let nres = knn
        .search(&[0.0; 4], &[], &mut distances, &mut ids)
        .unwrap();
    assert_eq!(nres, 0);
}
