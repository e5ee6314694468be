//! Built-in Korean rule pack.
//!
//! Each rule encodes one signal that an agent response is telling a device
//! to act. Rules are independent; the pack only grows.

use crate::patterns::Category;

/// Optional imperative ending allowed after an action or execution verb
/// (`재부팅해`, `실행해줘`, `수행해라`). Polite `-요` endings are left out:
/// `재부팅해요` and `열어요?` usually describe or ask rather than command.
/// Descriptive endings such as `재부팅하는` or `수행했다` also fail the
/// closing `\b`.
const IMPERATIVE_TAIL: &str = "(?:해|해줘|해라|하라|줘)?";

/// `(name, category, expression)` for every built-in rule.
pub(crate) fn rules() -> Vec<(&'static str, Category, String)> {
    vec![
        // "로봇에게 ... 명령하세요": a device addressed, then told to issue a command
        (
            "explicit_command",
            Category::ExplicitCommand,
            r"(?:로봇|기기|장치).{0,20}(?:에게|에)\s*.+?(?:명령|지시)\s*(?:하|내리)".to_owned(),
        ),
        // "아담에게 "앉아"라고 말하세요": a literal utterance relayed to a device or persona
        (
            "quoted_directive",
            Category::QuotedDirective,
            r#"(?:로봇|아담|이브|애플).{0,20}(?:에게|에)\s*["“].+?["”]\s*(?:라고|이라)\s*(?:말하|명령하|지시하)"#
                .to_owned(),
        ),
        // manual-register sentence endings
        (
            "formal_imperative",
            Category::FormalImperative,
            r"(?:하십시오|하시오|하세요)\b".to_owned(),
        ),
        (
            "action_verb",
            Category::ActionVerb,
            format!(
                r"(?:실행해|켜줘|꺼줘|눌러|열어|닫아|재부팅|리부팅|초기화){IMPERATIVE_TAIL}\b"
            ),
        ),
        // troubleshooting steps the agent wants actually carried out
        (
            "diagnostic_execution",
            Category::DiagnosticExecution,
            format!(
                r"(?:진단|테스트|캘리브레이션|핑\s*테스트|POST).{{0,10}}(?:실행|수행){IMPERATIVE_TAIL}\b"
            ),
        ),
    ]
}

#[cfg(test)]
mod tests {
    use crate::patterns::{Category, Locale, PatternSet};

    fn categories(text: &str) -> Vec<Category> {
        PatternSet::builtin(Locale::Korean)
            .matching(text)
            .map(|m| m.category())
            .collect()
    }

    fn hits(text: &str, category: Category) -> bool {
        categories(text).contains(&category)
    }

    // ── explicit command issuance ──

    #[test]
    fn explicit_command_to_robot() {
        assert!(hits(
            "로봇에게 전원을 끄라고 명령하세요",
            Category::ExplicitCommand
        ));
    }

    #[test]
    fn explicit_instruction_to_device() {
        assert!(hits(
            "장치에 즉시 정지하라고 지시하세요",
            Category::ExplicitCommand
        ));
    }

    #[test]
    fn explicit_command_needs_a_device() {
        assert!(!hits("친구에게 명령하지 마세요", Category::ExplicitCommand));
    }

    // ── quoted directive ──

    #[test]
    fn quoted_directive_to_persona() {
        assert!(hits(
            "아담에게 \"앉아\"라고 말하세요",
            Category::QuotedDirective
        ));
    }

    #[test]
    fn quoted_directive_with_curly_quotes() {
        assert!(hits(
            "이브에게 “문을 열어”라고 지시하세요",
            Category::QuotedDirective
        ));
    }

    #[test]
    fn quoted_directive_across_lines() {
        assert!(hits(
            "로봇에게\n\"전원을 꺼\"\n라고 명령하세요",
            Category::QuotedDirective
        ));
    }

    #[test]
    fn quote_without_relay_verb() {
        assert!(!hits(
            "아담에게 \"안녕\"이라는 인사를 들었어요",
            Category::QuotedDirective
        ));
    }

    // ── formal imperative endings ──

    #[test]
    fn formal_imperative_endings() {
        assert!(hits("버튼을 확인하십시오", Category::FormalImperative));
        assert!(hits("설정을 변경하시오", Category::FormalImperative));
        assert!(hits("다시 시도하세요.", Category::FormalImperative));
    }

    #[test]
    fn formal_ending_inside_longer_word() {
        assert!(!hits("하세요체는 존댓말입니다", Category::FormalImperative));
    }

    // ── action verbs ──

    #[test]
    fn action_verb_bare() {
        assert!(hits("재부팅", Category::ActionVerb));
        assert!(hits("전원을 켜줘", Category::ActionVerb));
        assert!(hits("문을 닫아", Category::ActionVerb));
        assert!(hits("설정을 초기화", Category::ActionVerb));
    }

    #[test]
    fn action_verb_with_imperative_tail() {
        assert!(hits("로봇을 재부팅해", Category::ActionVerb));
        assert!(hits("프로그램을 실행해줘", Category::ActionVerb));
        assert!(hits("창문 열어줘", Category::ActionVerb));
    }

    #[test]
    fn action_verb_polite_statement_or_question() {
        assert!(!hits("창문 열어요", Category::ActionVerb));
        assert!(!hits("문을 열어요?", Category::ActionVerb));
        assert!(!hits(
            "로봇은 매일 밤 자동으로 재부팅해요",
            Category::ActionVerb
        ));
    }

    #[test]
    fn action_verb_descriptive_forms() {
        assert!(!hits("재부팅하는 방법이 궁금합니다", Category::ActionVerb));
        assert!(!hits("문을 닫아서 조용해졌다", Category::ActionVerb));
    }

    // ── diagnostic execution ──

    #[test]
    fn diagnostic_execution() {
        assert!(hits("진단을 실행", Category::DiagnosticExecution));
        assert!(hits("캘리브레이션 수행", Category::DiagnosticExecution));
        assert!(hits("핑 테스트를 수행해", Category::DiagnosticExecution));
    }

    #[test]
    fn diagnostic_polite_statement() {
        assert!(!hits("매주 진단을 수행해요", Category::DiagnosticExecution));
    }

    #[test]
    fn diagnostic_post_ignores_case() {
        assert!(hits("POST 실행", Category::DiagnosticExecution));
        assert!(hits("post 실행", Category::DiagnosticExecution));
    }

    #[test]
    fn diagnostic_already_done() {
        assert!(!hits("어제 진단을 수행했다", Category::DiagnosticExecution));
    }

    #[test]
    fn diagnostic_verb_too_far() {
        assert!(!hits(
            "테스트 결과는 내일 다시 정리해서 보고서로 실행",
            Category::DiagnosticExecution
        ));
    }

    // ── benign text ──

    #[test]
    fn descriptive_sentence_matches_nothing() {
        assert!(categories("오늘 날씨가 좋네요").is_empty());
        assert!(categories("로봇은 어제 충전되었습니다").is_empty());
    }
}
