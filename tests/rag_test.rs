use evoq::rag::corpus::RetrievedChunk;
use evoq::rag::{conditional_rag_prompt, serialize_chunks};

#[test]
fn chunks_serialize_as_document_blocks() {
    let chunks = vec![
        RetrievedChunk {
            source_display_name: "drilling_glossary.pdf".into(),
            text: "A downhole collection groups intervals measured along a drillhole.".into(),
        },
        RetrievedChunk {
            source_display_name: "survey_manual.pdf".into(),
            text: "Assay intervals are sampled lengths of core.".into(),
        },
    ];

    let serialized = serialize_chunks(&chunks);

    assert!(serialized.starts_with("Document: drilling_glossary.pdf\n"));
    assert!(serialized.contains("Content: A downhole collection"));
    assert!(serialized.contains("Document: survey_manual.pdf"));
    assert!(serialized.contains("---"));
}

#[test]
fn empty_retrieval_serializes_to_nothing() {
    assert_eq!(serialize_chunks(&[]), "");
}

#[test]
fn answer_prompt_embeds_question_and_context() {
    let prompt = conditional_rag_prompt(
        "What is a pointset?",
        "Document: glossary.pdf\nContent: A pointset is a set of located samples.\n---\n",
    );

    assert!(prompt.contains("**Question:** What is a pointset?"));
    assert!(prompt.contains("A pointset is a set of located samples."));
    assert!(prompt.contains("Retrieval Results"));
    assert!(prompt.contains("use your own internal knowledge"));
}
