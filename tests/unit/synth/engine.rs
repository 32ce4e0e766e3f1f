use super::*;

fn chunk(samples: Vec<f32>) -> SynthChunk {
    SynthChunk {
        graphemes: "text".to_string(),
        phonemes: String::new(),
        samples,
    }
}

#[test]
fn zero_chunks_is_empty() {
    assert!(matches!(collect_chunks(vec![]), Err(SynthesisError::Empty)));
}

#[test]
fn zero_total_samples_is_empty() {
    let chunks = vec![chunk(vec![]), chunk(vec![])];
    assert!(matches!(collect_chunks(chunks), Err(SynthesisError::Empty)));
}

#[test]
fn chunks_join_along_the_time_axis() {
    let chunks = vec![chunk(vec![0.1, 0.2]), chunk(vec![]), chunk(vec![0.3])];
    assert_eq!(collect_chunks(chunks).unwrap(), vec![0.1, 0.2, 0.3]);
}

#[test]
fn error_messages_name_the_failure() {
    assert!(SynthesisError::Empty.to_string().contains("no audio"));
    assert!(
        SynthesisError::Engine("model crashed".to_string())
            .to_string()
            .contains("model crashed")
    );
}
