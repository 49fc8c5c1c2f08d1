//! Reader for CoNLL-U dependency parses.
//!
//! Each sentence block needs a `# text = ...` comment. Character offsets are
//! recovered by locating every FORM in that text, left to right. Multiword
//! token ranges (`1-2`) and empty nodes (`1.1`) are skipped.

use crate::{CorpusError, CorpusResult};
use cframes::{ParsedSentence, Token};

const ID: usize = 0;
const FORM: usize = 1;
const LEMMA: usize = 2;
const HEAD: usize = 6;
const DEPREL: usize = 7;

/// Parse all sentences in a CoNLL-U document.
pub fn parse_conllu(input: &str) -> CorpusResult<Vec<ParsedSentence>> {
    let mut sentences = Vec::new();
    let mut block = SentenceBlock::default();

    for (line_idx, line) in input.lines().enumerate() {
        let line_num = line_idx + 1;
        let trimmed = line.trim_end();

        if trimmed.is_empty() {
            if let Some(sentence) = block.finish()? {
                sentences.push(sentence);
            }
            block = SentenceBlock::default();
        } else if let Some(comment) = trimmed.strip_prefix('#') {
            if let Some(text) = comment.trim_start().strip_prefix("text =") {
                block.text = Some(text.trim().to_string());
            }
        } else {
            block.push_token_line(trimmed, line_num)?;
        }
    }

    if let Some(sentence) = block.finish()? {
        sentences.push(sentence);
    }

    Ok(sentences)
}

#[derive(Default)]
struct SentenceBlock {
    text: Option<String>,
    tokens: Vec<Token>,
    /// (line number, raw HEAD column) per token
    heads: Vec<(usize, usize)>,
    /// Byte position in `text` after the last located form
    cursor: usize,
}

impl SentenceBlock {
    fn push_token_line(&mut self, line: &str, line_num: usize) -> CorpusResult<()> {
        let columns: Vec<&str> = line.split('\t').collect();
        if columns.len() < 8 {
            return Err(CorpusError::Conllu {
                line: line_num,
                message: format!(
                    "expected at least 8 tab-separated columns, found {}",
                    columns.len()
                ),
            });
        }

        let id = columns[ID];
        if id.contains('-') || id.contains('.') {
            return Ok(());
        }
        let id: usize = id.parse().map_err(|_| CorpusError::Conllu {
            line: line_num,
            message: format!("invalid token id '{}'", id),
        })?;
        if id != self.tokens.len() + 1 {
            return Err(CorpusError::Conllu {
                line: line_num,
                message: format!("expected token id {}, found {}", self.tokens.len() + 1, id),
            });
        }

        let head: usize = columns[HEAD].parse().map_err(|_| CorpusError::Conllu {
            line: line_num,
            message: format!("invalid head '{}'", columns[HEAD]),
        })?;

        let text = self.text.as_deref().ok_or_else(|| CorpusError::Conllu {
            line: line_num,
            message: "token line before '# text =' comment".to_string(),
        })?;
        let form = columns[FORM];
        let byte_pos = text[self.cursor..]
            .find(form)
            .map(|pos| pos + self.cursor)
            .ok_or_else(|| CorpusError::Conllu {
                line: line_num,
                message: format!("form '{}' not found in sentence text", form),
            })?;
        let idx = text[..byte_pos].chars().count();
        self.cursor = byte_pos + form.len();

        // HEAD 0 marks the root, which is its own head
        let head_idx = if head == 0 { id - 1 } else { head - 1 };
        self.tokens.push(Token::new(form, idx, columns[DEPREL], columns[LEMMA], head_idx));
        self.heads.push((line_num, head));
        Ok(())
    }

    fn finish(self) -> CorpusResult<Option<ParsedSentence>> {
        let text = match self.text {
            Some(text) if !self.tokens.is_empty() => text,
            _ => return Ok(None),
        };

        let len = self.tokens.len();
        for (token, &(line, head)) in self.tokens.iter().zip(&self.heads) {
            if head > len {
                return Err(CorpusError::Conllu {
                    line,
                    message: format!("head {} of '{}' outside the sentence", head, token.text),
                });
            }
        }

        Ok(Some(ParsedSentence::new(text, self.tokens)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PASSIVE: &str = "\
# sent_id = 1
# text = The cat was chased by the dog.
1\tThe\tthe\tDET\tDT\t_\t2\tdet\t_\t_
2\tcat\tcat\tNOUN\tNN\t_\t4\tnsubj:pass\t_\t_
3\twas\tbe\tAUX\tVBD\t_\t4\taux:pass\t_\t_
4\tchased\tchase\tVERB\tVBN\t_\t0\troot\t_\t_
5\tby\tby\tADP\tIN\t_\t7\tcase\t_\t_
6\tthe\tthe\tDET\tDT\t_\t7\tdet\t_\t_
7\tdog\tdog\tNOUN\tNN\t_\t4\tobl:agent\t_\tSpaceAfter=No
8\t.\t.\tPUNCT\t.\t_\t4\tpunct\t_\t_
";

    #[test]
    fn recovers_offsets_and_heads() {
        let sentences = parse_conllu(PASSIVE).unwrap();
        assert_eq!(sentences.len(), 1);

        let sentence = &sentences[0];
        assert_eq!(sentence.text, "The cat was chased by the dog.");
        assert_eq!(sentence.tokens.len(), 8);

        let cat = &sentence.tokens[1];
        assert_eq!((cat.idx, cat.head, cat.dep.as_str()), (4, 3, "nsubj:pass"));

        let root = &sentence.tokens[3];
        assert_eq!(root.head, 3);
        assert_eq!(sentence.head(3), None);

        let period = &sentence.tokens[7];
        assert_eq!(period.idx, 29);
    }

    #[test]
    fn skips_multiword_ranges() {
        let input = "\
# text = I can't go
1\tI\tI\tPRON\t_\t_\t4\tnsubj\t_\t_
2-3\tcan't\t_\t_\t_\t_\t_\t_\t_\t_
2\tca\tcan\tAUX\t_\t_\t4\taux\t_\t_
3\tn't\tnot\tPART\t_\t_\t4\tadvmod\t_\t_
4\tgo\tgo\tVERB\t_\t_\t0\troot\t_\t_
";
        let sentences = parse_conllu(input).unwrap();
        let tokens = &sentences[0].tokens;
        assert_eq!(tokens.len(), 4);
        assert_eq!(tokens[1].idx, 2);
        assert_eq!(tokens[2].idx, 4);
        assert_eq!(tokens[3].idx, 8);
    }

    #[test]
    fn multiple_sentences() {
        let input = format!("{}\n# text = Go.\n1\tGo\tgo\tVERB\t_\t_\t0\troot\t_\t_\n2\t.\t.\tPUNCT\t_\t_\t1\tpunct\t_\t_\n", PASSIVE);
        let sentences = parse_conllu(&input).unwrap();
        assert_eq!(sentences.len(), 2);
        assert_eq!(sentences[1].tokens[1].idx, 2);
    }

    #[test]
    fn missing_text_comment_is_an_error() {
        let err = parse_conllu("1\tGo\tgo\tVERB\t_\t_\t0\troot\t_\t_\n").unwrap_err();
        assert!(matches!(err, CorpusError::Conllu { line: 1, .. }));
    }

    #[test]
    fn form_absent_from_text_is_an_error() {
        let input = "# text = Go.\n1\tStop\tstop\tVERB\t_\t_\t0\troot\t_\t_\n";
        let err = parse_conllu(input).unwrap_err();
        assert!(err.to_string().contains("'Stop' not found"));
    }

    #[test]
    fn short_token_line_is_an_error() {
        let input = "# text = Go.\n1\tGo\tgo\tVERB\n";
        let err = parse_conllu(input).unwrap_err();
        assert!(matches!(err, CorpusError::Conllu { line: 2, .. }));
        assert!(err.to_string().contains("at least 8"));
    }

    #[test]
    fn head_outside_sentence_is_an_error() {
        let input = "# text = Go.\n1\tGo\tgo\tVERB\t_\t_\t5\troot\t_\t_\n";
        let err = parse_conllu(input).unwrap_err();
        assert!(matches!(err, CorpusError::Conllu { line: 2, .. }));
    }
}
