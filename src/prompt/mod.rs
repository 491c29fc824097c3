// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Diagen-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Diagen and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Prompt construction.
//!
//! Each prompt describes the exact JSON shape the validator accepts, embeds the user input
//! between `---` rulers, and ends with a worked example.

mod settings;

pub use settings::{GenerationSettings, JSON_MIME_TYPE};

use std::fmt::Write as _;

use crate::model::{icon_keywords, DiagramModule, DiagramStyle, DiagramType};
use settings::is_minimalist;

const EXPLANATION_SECTIONS: &str = "\
  - Title: A concise title for the topic.
  - Introduction: Briefly introduce the topic, its importance/usefulness.
  - Main Explanation: Break down the topic step-by-step. Use subheadings that correspond to the main components of the diagram you are generating. Explain technical terms simply.
  - Diagram Description: Describe how the generated diagram visually represents the concepts in the Main Explanation. Ensure alignment between diagram labels/parts and the Main Explanation subheadings.
  - Real-World Example or Analogy: A relatable example or analogy.
  - Summary: Key points in a bulleted list (e.g., \"- Point 1\").
  - Quiz Questions (Optional): 2-3 short questions to reinforce learning.";

const EXPLANATION_EXAMPLE: &str = "\
Title: Understanding a Simple Login Process
Introduction: This explanation covers how a basic login system works, which is crucial for secure access to applications.
Main Explanation:
  User Enters Credentials: The user provides their username and password. This corresponds to the 'User Input' node in the diagram.
  System Validates: The system checks if the credentials are correct. This is shown by the 'Validation' node.
  Access Granted/Denied: Based on validation, the user is either taken to the dashboard or shown an error. See 'Dashboard Access' and 'Error Message' nodes.
Diagram Description: The diagram visualizes this flow: 'User Input' leads to 'Validation', which then branches to either 'Dashboard Access' or 'Error Message'.
Real-World Example or Analogy: Think of it like a secret handshake. If you know it (correct credentials), you get in (access dashboard). If not, you're turned away (error).
Summary:
  - Users provide credentials.
  - System checks them.
  - Access is granted or denied.
Quiz Questions:
  1. What is the first step in a login process?
  2. What happens if credentials are invalid?";

const SMART_EXPLANATION_EXAMPLE: &str = "\
Justification for Diagram Choice: A Flowchart is suitable here because the input describes a sequential process with clear steps.
Title: Understanding the Process
Introduction: This flowchart explains the process X, highlighting its key stages.
Main Explanation:
  Step 1 Name (Node 1): Description of Step 1.
  Step 2 Name (Node 2): Description of Step 2.
Diagram Description: The flowchart shows 'Step 1 Name' leading to 'Step 2 Name'.
Real-World Example or Analogy: Like following a recipe.
Summary:
  - Process X involves Step 1 then Step 2.
Quiz Questions:
  1. What is the first step in Process X?";

const NODE_LABELING: &str = "\
Node labels:
   - Use clear, descriptive text for all nodes
   - For complex node text (with spaces or special characters), enclose in quotes: `\"Node Text\"`
   - For better readability, use node IDs with labels: `nodeId[\"Node Label\"]`";

const INTERACTIVE_EXAMPLE: &str = r#"{
  "nodes": [
    { "id": "n1", "data": { "label": "Start", "iconKeyword": "play" }, "position": { "x": 250, "y": 0 }, "type": "input" },
    { "id": "n2", "data": { "label": "Process A" }, "position": { "x": 250, "y": 100 } },
    { "id": "n3", "data": { "label": "User Login", "iconKeyword": "user" }, "position": { "x": 100, "y": 200 } },
    { "id": "n4", "data": { "label": "End", "iconKeyword": "flag" }, "position": { "x": 250, "y": 300 }, "type": "output" }
  ],
  "edges": [
    { "id": "e1-2", "source": "n1", "target": "n2", "label": "Next" },
    { "id": "e2-3", "source": "n2", "target": "n3" },
    { "id": "e3-4", "source": "n3", "target": "n4" }
  ],
  "explanation": "Title: ...\nIntroduction: ...\n(full structure described above)"
}"#;

const MERMAID_EXAMPLE: &str = r#"{
  "mermaidSyntax": "mindmap\n  %% Main Structure\n  root((Central Concept))\n    core[\"Core Idea\"]\n      sub1[\"Key Aspect 1\"]\n        detail1[\"Specific Detail\"]\n    support[\"Supporting Concept\"]\n  %% Applications\n    apps[\"Real-World Uses\"]\n      example1[\"Example 1\"]\n      example2[\"Example 2\"]",
  "explanation": "Title: Understanding [Central Concept]\nOverview: This mind map breaks down [Central Concept] into key components.\nKey Concepts:\n- Core Idea: [Explanation]\n  - Key Aspect 1: [Details]\n- Supporting Concept: [Explanation]\nRelationships: [How concepts connect]\nApplications: [Practical examples]\nSummary: [Key takeaways]"
}"#;

const SMART_MERMAID_EXAMPLE: &str = r#"{
  "suggestedDiagramType": "Mermaid Mind Map",
  "explanation": "Justification for Diagram Choice: A Mermaid Mind Map was chosen because ...\nTitle: ...",
  "mermaidSyntax": "mindmap\n  root((Main Idea))\n    section1_id[\"Section 1 (Details)\"]\n      Detail A\n    section2_id[\"Section 2 (Overview)\"]"
}"#;

const SMART_FLOWCHART_EXAMPLE: &str = r#"{
  "suggestedDiagramType": "Flowchart",
  "explanation": "Justification for Diagram Choice: A Flowchart is suitable here because ...\nTitle: ...",
  "diagramData": {
    "nodes": [
      { "id": "s1", "data": { "label": "Start", "iconKeyword": "play" }, "position": { "x": 100, "y": 50 }, "type": "input" },
      { "id": "s2", "data": { "label": "Core Step", "iconKeyword": "gear" }, "position": { "x": 100, "y": 150 } },
      { "id": "s3", "data": { "label": "End", "iconKeyword": "flag" }, "position": { "x": 100, "y": 250 }, "type": "output" }
    ],
    "edges": [
      { "id": "e1-2", "source": "s1", "target": "s2" },
      { "id": "e2-3", "source": "s2", "target": "s3" }
    ]
  }
}"#;

fn icon_vocabulary() -> String {
    icon_keywords().collect::<Vec<_>>().join(", ")
}

fn system_instruction(ty: DiagramType, module: DiagramModule, style: DiagramStyle) -> String {
    if is_minimalist(ty, module, style) {
        return format!(
            "You are an expert diagram generation AI and an educational content designer. Your task is to convert the provided text into an EXTREMELY SIMPLE and CLEAR {ty} diagram, suitable for beginners, for an interactive diagramming tool, and provide a structured educational explanation.
The diagram must be MINIMALIST, using the FEWEST possible nodes (e.g., 2-5 core concepts) and connections to represent the CORE IDEA. Prioritize ultra-clarity.
Labels should be very short and simple keywords. For hierarchies, represent only top 1-2 levels. Ensure ample space. Avoid complex branching.
The explanation should be accessible to beginners with no prior knowledge of the topic."
        );
    }

    format!(
        "You are an expert diagram generation AI and an educational content designer. Your task is to convert the provided {input} into a {ty} for an interactive diagramming tool and provide a structured educational explanation.
Focus on creating a visually clear and understandable diagram.
If the text describes a hierarchy, structure the diagram accordingly. Use vertical stacking for main hierarchical levels and horizontal arrangement for peer-level concepts. Ensure generous spacing.
Node labels should be concise keywords or very short phrases.
The explanation should be accessible to beginners with no prior knowledge of the topic.",
        input = module.input_noun(),
    )
}

/// Prompt for a node/edge diagram of a user-chosen type.
pub fn interactive_diagram_prompt(
    input: &str,
    ty: DiagramType,
    module: DiagramModule,
    style: DiagramStyle,
) -> String {
    let input_noun = module.input_noun();
    let mut prompt = String::new();

    // Writing into a String cannot fail.
    let _ = write!(
        prompt,
        "
{instruction}
Your response MUST be a single, valid JSON object.
Do NOT include any text, explanations, comments, or summaries before or after the JSON object.
Do NOT use markdown code fences (like ```json).
Ensure the JSON structure itself is strictly valid. Pay meticulous attention to commas and closing braces/brackets.

The JSON object must have three top-level keys: \"nodes\", \"edges\", and \"explanation\".

\"nodes\": An array of node objects. Each node object must have:
  - \"id\": A unique string identifier (e.g., \"n1\").
  - \"data\": An object with:
    - \"label\": A string for the node's display text (concise).
    - \"iconKeyword\" (optional): A single keyword for an icon, one of: {icons}. Omit if no icon fits.
  - \"position\": An object with \"x\" and \"y\" numerical coordinates. Distribute nodes clearly.
  - \"type\" (optional): \"input\" for start, \"output\" for end.

\"edges\": An array of edge objects. Each edge object must have:
  - \"id\": A unique string identifier (e.g., \"e1-2\").
  - \"source\": The \"id\" of the source node.
  - \"target\": The \"id\" of the target node.
  - \"label\" (optional): A brief string label for the edge.

\"explanation\": A string containing an educational explanation for beginners. It MUST be structured with the following sections, each starting on a new line:
{sections}
  Example of explanation format:
{explanation_example}

Constraints:
- All node IDs unique. Edge source/target IDs refer to existing node IDs.
- Labels concise. JSON validity is paramount.
- Every JSON object and array MUST be correctly closed. Commas are critical.

Input {input_noun}:
---
{input}
---

Generate the JSON for a {ty}.
Example of the exact JSON structure expected (explanation content is illustrative and must follow the full structure described above):
{example}

CRITICAL: The entire response MUST BE ONLY the JSON object. No extra text, comments, or characters before the opening `{{` or after the closing `}}`.
",
        instruction = system_instruction(ty, module, style),
        icons = icon_vocabulary(),
        sections = EXPLANATION_SECTIONS,
        explanation_example = EXPLANATION_EXAMPLE,
        example = INTERACTIVE_EXAMPLE,
    );

    prompt
}

/// Prompt for a Mermaid mind map plus a structured summary.
pub fn mermaid_mind_map_prompt(input: &str) -> String {
    format!(
        "
You are an expert educational content designer creating clear, structured Mermaid.js mind maps.
Generate a JSON response with these keys:

1. \"mermaidSyntax\": A well-structured Mermaid mind map that starts with \"mindmap\" and uses:
   - Clear hierarchy using 2-space indentation
   - ALL nodes connected to the root node; never disconnected nodes at the same level as the root
   - Descriptive node IDs (e.g., concept_id[\"Label\"])
   - Short, focused node labels (1-3 words)
   - Related concepts grouped with %% comments

2. \"explanation\": A structured summary with a title, an overview, key concepts, relationships, applications and a summary.

{labeling}

Example response (must be valid JSON):
{example}

Input to analyze:
---
{input}
---

Additional guidelines:
- Mermaid syntax must be valid
- Keep node text concise
- Use proper escaping for quotes
- Ensure proper indentation for readability
",
        labeling = NODE_LABELING,
        example = MERMAID_EXAMPLE,
    )
}

/// Prompt asking the model to pick the simplest suitable diagram type itself.
pub fn smart_diagram_prompt(input: &str, module: DiagramModule) -> String {
    let (input_kind, input_title) = match module {
        DiagramModule::Code => ("code snippet", "Code Snippet"),
        DiagramModule::Text => ("textual description", "Text"),
    };
    let offered = DiagramType::smart_candidates(module)
        .iter()
        .map(|ty| ty.name())
        .collect::<Vec<_>>()
        .join(", ");

    format!(
        "
You are an advanced AI diagramming assistant and an educational content designer. Your task is to analyze the provided input ({input_kind}), select the MOST SUITABLE and SIMPLEST diagram type, generate its data, AND provide a structured educational explanation including your justification for the chosen diagram type.
Focus on simplification for complex inputs. The explanation should be accessible to beginners.

Input {input_title}:
---
{input}
---

Instructions:
1.  Analyze input: Understand core concepts, relationships, structure.
2.  Select Diagram Type: Choose the most appropriate and simplest from: {offered}. Prioritize clarity.
3.  Generate Diagram Data & Explanation.

Your entire response MUST be a single, valid JSON object with NO markdown fences.
The JSON object must contain:
- \"suggestedDiagramType\": A string, exactly one of the valid diagram types.
- \"explanation\": A string. It MUST start with a \"Justification for Diagram Choice:\" section explaining why this diagram type was chosen, followed by:
{sections}
  Example explanation for smart selection:
{smart_example}
- EITHER \"mermaidSyntax\" (string) if \"{mermaid}\" was chosen.
  - Mermaid syntax must be valid, start with \"mindmap\", use indentation.
  - {labeling}
  - No `:::className` after mind map node definitions.
- OR \"diagramData\" (object with \"nodes\" and \"edges\" arrays) for all other types.
  - Nodes: \"id\", \"data\" (with \"label\", optional \"iconKeyword\" from: {icons}), \"position\". Concise labels.
  - Edges: \"id\", \"source\", \"target\", optional \"label\".
  - Ensure all JSON sub-objects (nodes, data, position, edges) are correctly formatted and terminated.

Example for Mermaid Mind Map:
{mermaid_example}

Example for Simple Flowchart:
{flowchart_example}

CRITICAL: Ensure the output is ONLY the JSON object. NO extraneous characters or comments. The explanation MUST follow the detailed structured format including the justification.
",
        sections = EXPLANATION_SECTIONS,
        smart_example = SMART_EXPLANATION_EXAMPLE,
        mermaid = DiagramType::MermaidMindMap,
        labeling = NODE_LABELING,
        icons = icon_vocabulary(),
        mermaid_example = SMART_MERMAID_EXAMPLE,
        flowchart_example = SMART_FLOWCHART_EXAMPLE,
    )
}

#[cfg(test)]
mod tests {
    use super::{interactive_diagram_prompt, mermaid_mind_map_prompt, smart_diagram_prompt};
    use crate::model::{DiagramModule, DiagramStyle, DiagramType, DEFAULT_PROMPT_CODE};

    #[test]
    fn interactive_prompt_embeds_input_and_type() {
        let prompt = interactive_diagram_prompt(
            "user logs in",
            DiagramType::Flowchart,
            DiagramModule::Text,
            DiagramStyle::Standard,
        );
        assert!(prompt.contains("---\nuser logs in\n---"));
        assert!(prompt.contains("Generate the JSON for a Flowchart."));
        assert!(prompt.contains("Input text:"));
        assert!(!prompt.contains("MINIMALIST"));
    }

    #[test]
    fn simple_text_style_uses_minimalist_instruction() {
        let prompt = interactive_diagram_prompt(
            "photosynthesis",
            DiagramType::KeywordCluster,
            DiagramModule::Text,
            DiagramStyle::Simple,
        );
        assert!(prompt.contains("EXTREMELY SIMPLE and CLEAR Keyword Cluster diagram"));
        assert!(prompt.contains("MINIMALIST"));
    }

    #[test]
    fn code_prompt_names_code_snippet() {
        let prompt = interactive_diagram_prompt(
            DEFAULT_PROMPT_CODE,
            DiagramType::ControlFlowGraph,
            DiagramModule::Code,
            DiagramStyle::Simple,
        );
        assert!(prompt.contains("Input code snippet:"));
        assert!(prompt.contains("convert the provided code snippet into a Control Flow Graph"));
    }

    #[test]
    fn interactive_prompt_lists_icon_vocabulary() {
        let prompt = interactive_diagram_prompt(
            "x",
            DiagramType::MindMap,
            DiagramModule::Text,
            DiagramStyle::Standard,
        );
        assert!(prompt.contains("one of: user, database,"));
    }

    #[test]
    fn interactive_example_is_valid_for_the_validator() {
        let payload = crate::validate::parse_diagram_payload(
            super::INTERACTIVE_EXAMPLE,
            crate::validate::ValidationMode::Full,
        )
        .expect("example payload");
        assert_eq!(payload.nodes.len(), 4);
        assert_eq!(payload.edges.len(), 3);
    }

    #[test]
    fn mermaid_prompt_asks_for_mindmap_keyword() {
        let prompt = mermaid_mind_map_prompt("languages");
        assert!(prompt.contains("starts with \"mindmap\""));
        assert!(prompt.contains("---\nlanguages\n---"));
    }

    #[test]
    fn smart_prompt_lists_offered_types_for_module() {
        let code = smart_diagram_prompt("fn main() {}", DiagramModule::Code);
        assert!(code.contains("simplest from: Control Flow Graph."));

        let text = smart_diagram_prompt("a story", DiagramModule::Text);
        assert!(text.contains("Flowchart, Mind Map, Basic Linear Flow"));
        assert!(text.contains("Justification for Diagram Choice:"));
    }

    #[test]
    fn smart_examples_are_accepted_by_the_validator() {
        use crate::validate::parse_smart_response;

        // The example explanations are truncated, so pad them past the minimum length.
        for example in [super::SMART_MERMAID_EXAMPLE, super::SMART_FLOWCHART_EXAMPLE] {
            let mut value: serde_json::Value = serde_json::from_str(example).unwrap();
            let explanation = value["explanation"].as_str().unwrap().to_owned();
            value["explanation"] = format!("{explanation} {}", "detail ".repeat(10)).into();
            parse_smart_response(&value.to_string(), DiagramModule::Text).expect("example");
        }
    }
}
