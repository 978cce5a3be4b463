// All LLM prompt constants for the profile extraction module.
// Cross-cutting fragments (JSON-only, OCR) live in llm_client::prompts.

/// System prompt for profile extraction. Enforces JSON-only output.
pub const PROFILE_EXTRACTION_SYSTEM: &str =
    "You are an expert assistant for resume analysis and information \
    extraction in a recruitment system. \
    You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

/// Profile extraction prompt template. Replace `{resume_text}` before sending.
pub const PROFILE_EXTRACTION_PROMPT_TEMPLATE: &str = r#"Analyze the following resume text and extract detailed candidate information.

Return a JSON object with this EXACT schema (no extra fields):
{
  "name": "Full Candidate Name",
  "summary": "A concise, engaging paragraph about the candidate's profile, highlighting strengths, relevant experience, and career goals.",
  "email": "candidate.email@example.com",
  "phone": "+55 (11) 98765-4321",
  "experience": [
    {
      "description": "Developed and maintained web applications, optimizing performance and integrating third-party APIs. Led a team of 3 developers on a critical project.",
      "company": "Tech Solutions Inc.",
      "title": "Senior Backend Developer",
      "start_date": "2022-03-01",
      "end_date": null,
      "is_current": true
    }
  ],
  "education": [
    {
      "description": "Degree in Computer Science with a focus on algorithms and data structures.",
      "degree": "bachelor",
      "institution": "Universidade Federal XYZ",
      "field_of_study": "Computer Science",
      "start_date": "2014-08-01",
      "end_date": "2018-12-31"
    }
  ],
  "skills": ["Python", "AWS", "Docker", "SQL", "Communication", "Leadership"]
}

Rules for extraction:

DATES:
- Use "YYYY-MM-DD" (preferred) or "YYYY-MM"
- If only a year is found, use "YYYY-01-01"
- If "Present" (or "Atual") is indicated, or the end date is unclear, set "end_date" to null and "is_current" to true for that position

DEGREE (pick exactly one per education entry):
"bachelor", "high_school", "elementary_school", "master", "technical", "doctorate", "postgraduate", "certificate", "open_course", "other"
Use the closest match when ambiguous; use "other" when nothing fits.

MISSING INFORMATION:
- Use null for text fields that are not found, false for booleans, and [] for lists
- Do NOT invent information that is not in the text

The resume may be written in English or Portuguese. Always return the JSON field names exactly as in the schema above.

RESUME TEXT:
{resume_text}"#;
