//! Builds the grading prompt sent to the evaluation model. The student code
//! is sanitized before it is embedded; a submission whose sanitized form is
//! empty is rejected here, before any prompt text exists.

use crate::sanitize;
use thiserror::Error;

/// Everything needed to grade one submission.
pub struct GradingRequest<'a> {
    /// Assignment statement, shown to the student (Spanish).
    pub assignment: &'a str,
    /// Hidden reference solution. Never shown to the student.
    pub reference_solution: &'a str,
    /// Raw student code, untrusted.
    pub student_code: &'a str,
}

#[derive(Debug, Error, PartialEq)]
#[error("submission contains no sanitizable assembly")]
pub struct EmptySubmission;

/// Renders the grading prompt, or fails if sanitizing the student code left
/// nothing to grade.
pub fn build_prompt(request: &GradingRequest) -> Result<String, EmptySubmission> {
    let sanitized = sanitize(request.student_code);
    if sanitized.is_empty() {
        return Err(EmptySubmission);
    }

    Ok(format!(
        "You are an expert teaching assistant for Computer Architecture courses.\n\
         Evaluate a student's Assembly solution against a hidden reference solution.\n\
         Output MUST be valid JSON, in Spanish, following the schema below.\n\
         Be strict but constructive. Focus on correctness, common assembly pitfalls,\n\
         edge cases, registers usage, memory addressing, calling conventions, and I/O handling.\n\
         \n\
         ASSIGNMENT (Spanish):\n{assignment}\n\
         \n\
         REQUIREMENTS:\n\
         - Evaluate ONLY for the specified assembly target MSX86.\n\
         - If student's approach differs from reference but is correct, accept it.\n\
         - If incorrect, list the top issues clearly for a student audience.\n\
         \n\
         REFERENCE_SOLUTION (secret, do not reveal to student):\n\
         ```asm\n{reference}\n```\n\
         \n\
         STUDENT_CODE:\n\
         \n\
         ```asm\n{student}\n```\n\
         \n\
         OUTPUT SCHEMA (return JSON in Spanish, no extra text):\n\
         {{\n\
         \x20 \"es_correcto\": boolean,\n\
         \x20 \"puntaje\": number,\n\
         \x20 \"errores\": string[],\n\
         \x20 \"sugerencias\": string[],\n\
         \x20 \"observaciones\": string\n\
         }}",
        assignment = request.assignment,
        reference = request.reference_solution,
        student = sanitized,
    ))
}
