// All LLM prompt constants for cover letter generation.

/// System prompt template. Replace `{tone}` before sending.
pub const COVER_LETTER_SYSTEM_TEMPLATE: &str = "You are an expert cover letter writer. \
    Create compelling, personalized cover letters that highlight the candidate's strengths \
    and match them to job requirements. Use a {tone} tone.";

/// Cover letter prompt template. Replace `{resume}`, `{job_description}`,
/// `{company}`, `{position}`, `{tone}`, and `{date}`.
pub const COVER_LETTER_PROMPT_TEMPLATE: &str = r#"Write a compelling cover letter for the following job application:

RESUME SUMMARY:
{resume}

JOB DESCRIPTION:
{job_description}

DETAILS:
- Company: {company}
- Position: {position}
- Tone: {tone}
- Date: {date}

REQUIREMENTS:
1. Professional format with proper structure
2. Highlight relevant experience from resume that matches job requirements
3. Show enthusiasm for the company and role
4. Keep it concise (3-4 paragraphs)
5. Use {tone} tone throughout
6. Include specific examples from resume
7. End with strong call to action

Format the cover letter properly with:
- Date
- Company address placeholder
- Proper salutation
- Body paragraphs
- Professional closing"#;

/// System prompt template for industry customization. Replace `{industry}`.
pub const INDUSTRY_SYSTEM_TEMPLATE: &str = "You are an expert in {industry} industry \
    recruitment. Customize cover letters to highlight industry-relevant skills and knowledge.";

/// Industry customization prompt template. Replace `{cover_letter}` and
/// `{industry}`.
pub const INDUSTRY_PROMPT_TEMPLATE: &str = r#"Customize this cover letter for the {industry} industry:

ORIGINAL COVER LETTER:
{cover_letter}

REQUIREMENTS:
1. Add industry-specific terminology and keywords
2. Highlight relevant skills for {industry}
3. Show understanding of industry trends and challenges
4. Maintain the original structure and tone
5. Keep the same length

Return the customized cover letter."#;
