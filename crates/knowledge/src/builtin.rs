//! The built-in ISTQB Foundation corpus.
//!
//! The corpus is a fixed in-memory dataset compiled into the binary; there is
//! no external file format to load. It still goes through the validating
//! builder so authoring mistakes (bad answer keys, dangling topic names)
//! surface at load time rather than during a quiz.

use qa_core::model::{Category, Question, Quiz, Topic};

use crate::store::{CorpusError, KnowledgeStore};

/// Builds the full ISTQB Foundation knowledge store: 7 categories, 26 topics,
/// and 4 quizzes of 2 questions each.
///
/// # Errors
///
/// Returns `CorpusError` if the authored data fails validation.
pub fn istqb_foundation() -> Result<KnowledgeStore, CorpusError> {
    let mut builder = KnowledgeStore::builder()
        .category(Category::new(
            "Testing Fundamentals",
            [
                "Definition of Testing",
                "Testing Objectives",
                "Seven Testing Principles",
                "Test Process",
                "Psychology of Testing",
            ],
        )?)
        .category(Category::new(
            "Testing Throughout SDLC",
            [
                "Software Development Models",
                "Test Levels",
                "Test Types",
                "Maintenance Testing",
            ],
        )?)
        .category(Category::new(
            "Static Testing",
            ["Review Process", "Static Analysis", "Review Types"],
        )?)
        .category(Category::new(
            "Test Design Techniques",
            [
                "Black-box Techniques",
                "White-box Techniques",
                "Experience-based Techniques",
            ],
        )?)
        .category(Category::new(
            "Test Management",
            [
                "Test Organization",
                "Test Planning and Estimation",
                "Test Monitoring and Control",
                "Risk Management",
                "Defect Management",
            ],
        )?)
        .category(Category::new(
            "Tool Support for Testing",
            ["Test Tool Considerations", "Effective Use of Tools"],
        )?)
        .category(Category::new(
            "Test Automation",
            [
                "Automation Approaches",
                "Test Automation Frameworks",
                "Automation ROI",
                "Continuous Integration/Deployment",
            ],
        )?);

    for (name, content) in topic_contents() {
        builder = builder.topic(Topic::new(name, content)?);
    }

    for quiz in quizzes()? {
        builder = builder.quiz(quiz);
    }

    builder.build()
}

#[allow(clippy::too_many_lines)]
fn topic_contents() -> Vec<(&'static str, &'static str)> {
    vec![
        (
            "Definition of Testing",
            "Software testing is the process of evaluating and verifying that a software \
             product or application does what it is supposed to do. The benefits of testing \
             include preventing defects, verifying requirements are met, and reducing \
             development costs by identifying bugs early.",
        ),
        (
            "Testing Objectives",
            "The main objectives of software testing are: finding defects, gaining confidence \
             about the level of quality, providing information for decision-making, and \
             preventing defects. Testing helps to identify and fix bugs before the product is \
             delivered to customers.",
        ),
        (
            "Seven Testing Principles",
            "The seven fundamental principles of testing are:\n\
             1. Testing shows the presence of defects, not their absence\n\
             2. Exhaustive testing is impossible\n\
             3. Early testing saves time and money\n\
             4. Defects cluster together\n\
             5. Beware of the pesticide paradox (tests lose effectiveness over time)\n\
             6. Testing is context dependent\n\
             7. Absence of errors is a fallacy",
        ),
        (
            "Test Process",
            "The fundamental test process consists of:\n\
             - Test planning and control\n\
             - Test analysis and design\n\
             - Test implementation and execution\n\
             - Evaluating exit criteria and reporting\n\
             - Test closure activities",
        ),
        (
            "Psychology of Testing",
            "Testing requires a different mindset than development. Testers need to maintain a \
             critical eye and identify potential issues without being defensive. Good \
             communication between testers and developers is essential for productive \
             collaboration.",
        ),
        (
            "Software Development Models",
            "Major development models include:\n\
             1. Waterfall Model: Linear sequential flow with distinct phases\n\
             2. V-Model: Testing activities parallel to each development phase\n\
             3. Incremental Development: System developed and delivered in increments\n\
             4. Iterative Development: System developed through repeated cycles\n\
             5. Agile: Emphasizes flexibility, customer collaboration, and rapid delivery\n\
             6. DevOps: Integrates development and operations with continuous delivery",
        ),
        (
            "Test Levels",
            "The four main levels of testing are:\n\
             1. Unit Testing: Testing individual components in isolation\n\
             2. Integration Testing: Testing interfaces between components\n\
             3. System Testing: Testing the complete integrated system\n\
             4. Acceptance Testing: Validating the system meets business requirements and is \
             ready for delivery",
        ),
        (
            "Test Types",
            "Main types of testing include:\n\
             1. Functional Testing: Tests what the system does\n\
             2. Non-functional Testing: Tests how well the system performs (performance, \
             usability, reliability, etc.)\n\
             3. Structural Testing: Tests the internal structure of the software\n\
             4. Change-related Testing: Tests after modifications (regression and confirmation \
             testing)",
        ),
        (
            "Maintenance Testing",
            "Maintenance testing is performed on existing software after changes, such as \
             enhancements, corrections, or adaptations to environment changes. It includes \
             regression testing to ensure existing functionality still works.",
        ),
        (
            "Review Process",
            "The formal review process includes these activities:\n\
             1. Planning: Define scope and criteria\n\
             2. Kick-off: Distribute materials and explain objectives\n\
             3. Individual preparation: Reviewers examine work products and note potential \
             defects\n\
             4. Review meeting: Discuss and document findings\n\
             5. Rework: Address identified issues\n\
             6. Follow-up: Verify issues were resolved correctly",
        ),
        (
            "Static Analysis",
            "Static analysis involves examining code without executing it, often using \
             automated tools to find defects. It can identify issues such as coding standard \
             violations, memory leaks, security vulnerabilities, and more.",
        ),
        (
            "Review Types",
            "Different review types include:\n\
             1. Informal Review: No formal process, may be as simple as asking a colleague for \
             feedback\n\
             2. Walkthrough: Author leads participants through a work product to gather \
             feedback\n\
             3. Technical Review: Documented, structured approach with focus on technical \
             quality\n\
             4. Inspection: Formal, rigorous review process with specific roles and metrics",
        ),
        (
            "Black-box Techniques",
            "Black-box testing techniques focus on inputs and outputs without knowledge of \
             internal code structure:\n\
             1. Equivalence Partitioning: Dividing input data into valid and invalid \
             partitions\n\
             2. Boundary Value Analysis: Testing values at the boundaries of partitions\n\
             3. Decision Table Testing: For complex business logic with combinations of \
             conditions\n\
             4. State Transition Testing: For systems that exhibit different states based on \
             inputs\n\
             5. Use Case Testing: Based on interactions between actors and the system",
        ),
        (
            "White-box Techniques",
            "White-box techniques examine the internal structure of the code:\n\
             1. Statement Coverage: Each executable statement is executed at least once\n\
             2. Decision Coverage: Each decision (true/false) is executed at least once\n\
             3. Condition Coverage: Each condition in a decision is evaluated to true and \
             false\n\
             4. Path Coverage: All possible paths through a program are executed",
        ),
        (
            "Experience-based Techniques",
            "Experience-based techniques rely on the tester's knowledge and experience:\n\
             1. Error Guessing: Anticipating where errors might occur based on experience\n\
             2. Exploratory Testing: Simultaneous learning, test design, and execution\n\
             3. Checklist-based Testing: Using checklists developed from experience on similar \
             projects",
        ),
        (
            "Test Organization",
            "Test organization involves deciding on the test team structure, roles and \
             responsibilities, and the degree of independence. Independence can range from \
             having developers test their own code to separate test teams or organizations.",
        ),
        (
            "Test Planning and Estimation",
            "Test planning includes determining the scope and objectives of testing, creating \
             test schedules, deciding on test approaches, establishing entry/exit criteria, \
             and estimating resources needed.",
        ),
        (
            "Test Monitoring and Control",
            "Test monitoring involves tracking progress against the plan, while test control \
             involves taking actions to meet the objectives. This includes metrics tracking, \
             risk identification, and implementing corrective actions.",
        ),
        (
            "Risk Management",
            "Risk management in testing involves identifying what can go wrong (risk), how \
             likely it is (likelihood), and what the impact would be. Testing is prioritized \
             to address the highest-risk areas first.",
        ),
        (
            "Defect Management",
            "The defect management process typically includes:\n\
             1. Detection: Finding the defect\n\
             2. Classification: Categorizing by severity, priority, etc.\n\
             3. Reporting: Documenting the defect\n\
             4. Analysis: Determining cause and impact\n\
             5. Resolution: Fixing the defect\n\
             6. Verification: Confirming the fix works\n\
             7. Closure: Finalizing the defect report",
        ),
        (
            "Test Tool Considerations",
            "When selecting test tools, consider organizational maturity, compatibility with \
             existing processes, evaluation period needs, pilot projects, vendor support, \
             training requirements, and ROI calculation.",
        ),
        (
            "Effective Use of Tools",
            "For effective tool adoption, introduce tools gradually, adapt processes to work \
             with the tools, provide training and mentoring, establish usage guidelines, \
             monitor tool usage and benefits, and provide support for the tool user.",
        ),
        (
            "Automation Approaches",
            "Common test automation approaches include:\n\
             1. Linear scripting (record and playback)\n\
             2. Structured scripting (using procedures/functions)\n\
             3. Data-driven testing (separating test data from scripts)\n\
             4. Keyword-driven testing (using action keywords)\n\
             5. Behavior-driven development (BDD)\n\
             6. Model-based testing",
        ),
        (
            "Test Automation Frameworks",
            "Test automation frameworks provide structures that make automation more \
             efficient:\n\
             1. Data-driven: Separates test data from test scripts\n\
             2. Keyword-driven: Uses action words to represent user interactions\n\
             3. Hybrid: Combines multiple framework approaches\n\
             4. Page Object Model: Abstracts UI elements into object-oriented classes\n\
             5. BDD Frameworks: Uses natural language specifications (e.g., Cucumber, \
             SpecFlow)",
        ),
        (
            "Automation ROI",
            "Return on Investment (ROI) for automation considers initial costs (tool licenses, \
             training, script development) versus long-term savings (reduced manual testing \
             time, earlier defect detection, increased test coverage).",
        ),
        (
            "Continuous Integration/Deployment",
            "CI/CD pipelines automate the building, testing, and deployment of applications. \
             Automated tests are essential in these pipelines, providing fast feedback about \
             application quality at each stage.",
        ),
    ]
}

fn quizzes() -> Result<Vec<Quiz>, CorpusError> {
    Ok(vec![
        Quiz::new(
            "Testing Fundamentals",
            vec![
                Question::new(
                    "Which of the following is NOT one of the seven testing principles?",
                    [
                        "Testing shows the presence of defects, not their absence",
                        "Exhaustive testing is impossible",
                        "Testing always improves software quality",
                        "Defects cluster together",
                    ],
                    2,
                )?,
                Question::new(
                    "What is the main purpose of software testing?",
                    [
                        "To make software completely bug-free",
                        "To demonstrate that software works perfectly",
                        "To find defects and reduce the risk of software failures",
                        "To ensure all requirements are implemented",
                    ],
                    2,
                )?,
            ],
        )?,
        // Keyed by a topic name, not a category name; quiz lookup is
        // name-based and decoupled from the category list.
        Quiz::new(
            "Test Levels",
            vec![
                Question::new(
                    "Which test level focuses on testing the interfaces between components?",
                    [
                        "Unit Testing",
                        "Integration Testing",
                        "System Testing",
                        "Acceptance Testing",
                    ],
                    1,
                )?,
                Question::new(
                    "Who typically performs acceptance testing?",
                    ["Developers", "Testers", "Users/Customers", "Project Managers"],
                    2,
                )?,
            ],
        )?,
        Quiz::new(
            "Test Design Techniques",
            vec![
                Question::new(
                    "Which of the following is a black-box testing technique?",
                    [
                        "Statement Coverage",
                        "Path Coverage",
                        "Boundary Value Analysis",
                        "Condition Coverage",
                    ],
                    2,
                )?,
                Question::new(
                    "In which technique do you test each true/false outcome of every decision?",
                    [
                        "Statement Coverage",
                        "Decision Coverage",
                        "Condition Coverage",
                        "Equivalence Partitioning",
                    ],
                    1,
                )?,
            ],
        )?,
        Quiz::new(
            "Test Automation",
            vec![
                Question::new(
                    "Which automation approach separates test data from test scripts?",
                    [
                        "Linear scripting",
                        "Structured scripting",
                        "Data-driven testing",
                        "Keyword-driven testing",
                    ],
                    2,
                )?,
                Question::new(
                    "What framework uses action words to represent user interactions?",
                    [
                        "Data-driven",
                        "Keyword-driven",
                        "Linear scripting",
                        "Behavior-driven",
                    ],
                    1,
                )?,
            ],
        )?,
    ])
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MISSING_CONTENT;

    #[test]
    fn builtin_corpus_passes_load_time_validation() {
        let store = istqb_foundation().unwrap();

        assert_eq!(store.categories().len(), 7);
        assert_eq!(store.quizzes().len(), 4);

        let topic_count: usize = store.categories().iter().map(|c| c.topics().len()).sum();
        assert_eq!(topic_count, 26);
    }

    #[test]
    fn category_order_matches_authored_order() {
        let store = istqb_foundation().unwrap();

        let names: Vec<&str> = store.categories().iter().map(Category::name).collect();
        assert_eq!(
            names,
            [
                "Testing Fundamentals",
                "Testing Throughout SDLC",
                "Static Testing",
                "Test Design Techniques",
                "Test Management",
                "Tool Support for Testing",
                "Test Automation",
            ]
        );
    }

    #[test]
    fn every_listed_topic_has_content() {
        let store = istqb_foundation().unwrap();

        for category in store.categories() {
            for topic in category.topics() {
                assert_ne!(store.content(topic), MISSING_CONTENT, "missing: {topic}");
            }
        }
    }

    #[test]
    fn test_levels_quiz_is_keyed_by_topic_name() {
        let store = istqb_foundation().unwrap();

        let questions = store.questions("Test Levels");
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].correct_index(), 1);
        assert_eq!(questions[1].correct_index(), 2);
    }

    #[test]
    fn automation_quiz_answer_key_is_valid() {
        let store = istqb_foundation().unwrap();

        let questions = store.questions("Test Automation");
        assert_eq!(questions[0].correct_index(), 2);
        assert!(questions[0].is_correct(2));
    }
}
