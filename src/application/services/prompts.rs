//! Fixed instruction templates for the two synthesizers. The transcript is
//! sent separately as the request content; these strings never change per
//! request.

pub const NOTES_INSTRUCTIONS: &str = "\
You are a world-class note-maker. Summarize the content you are given as \
clean bullet points. Keep the notes concise, logically grouped, and \
practical. Focus on key facts, definitions, steps, and outcomes.";

pub const QUIZ_INSTRUCTIONS: &str = "\
Create a 5-question quiz from the content you are given. Mix formats: \
3 multiple-choice questions with 4 options each (mark the correct one), \
1 short-answer question, and 1 true/false question. Keep every question \
unambiguous and practical.";
