//! Fixed reply scripts.
//!
//! These texts are part of the assistant's observable behavior and are
//! compared byte-for-byte in tests. Edit with care.

use crate::intent::Intent;

pub const SAFETY_SCRIPT: &str = "🛑 **I’m really glad you told me this.**\n\n\
You’re not alone, and what you’re feeling matters.\n\n\
Please reach out **right now**:\n\
- A trusted friend or family member\n\
- A mental health professional\n\
- Emergency services if you feel unsafe\n\n\
**India Helpline:** AASRA – 91-9820466726\n\n\
If you want, we can slow your breathing together.";

pub const BREATHING_ROUTINE: &str = "🧘 **5-Minute Calming Routine**\n\n\
1️⃣ Inhale for 4 seconds\n\
2️⃣ Hold for 4 seconds\n\
3️⃣ Exhale slowly for 6 seconds\n\
4️⃣ Repeat 5 times\n\n\
Place one hand on your chest while breathing.\n\n\
Tell me how your body feels now.";

pub const STRESS_GUIDANCE: &str = "🌿 **Stress means your nervous system is overloaded.**\n\n\
✔ Slow breathing\n\
✔ Reduce screen stimulation\n\
✔ Gentle movement\n\n\
Would you like a **guided calming routine**?";

pub const DIET_GUIDANCE: &str = "🥗 **Diet depends on your goal.**\n\n\
For fat loss:\n\
✔ Small calorie deficit\n\
✔ High protein & fiber\n\n\
For muscle growth:\n\
✔ Protein + carbs\n\
✔ Strength training\n\n\
Tell me your exact goal.";

pub const FITNESS_GUIDANCE: &str = "🏋️ **Fitness works when it’s sustainable.**\n\n\
✔ Train 3–5x/week\n\
✔ Progressive overload\n\
✔ Proper recovery\n\n\
Are you a beginner or experienced?";

pub const SLEEP_GUIDANCE: &str = "😴 **Better sleep comes from routine.**\n\n\
✔ Fixed bedtime\n\
✔ No phone 1 hour before sleep\n\
✔ Dark, cool room\n\n\
Want a night routine?";

pub const MOTIVATION_GUIDANCE: &str = "🔥 **Low motivation is mental fatigue, not laziness.**\n\n\
✔ Start small\n\
✔ Reduce friction\n\
✔ Track progress\n\n\
Want a simple daily system?";

/// Appended to canned replies under `RiskPolicy::RemindHelpline`.
pub const HELPLINE_REMINDER: &str = "\n\n---\n\
If things feel heavy again, AASRA is reachable at 91-9820466726.";

/// The guidance script for a topic intent, `None` for everything else.
pub fn guidance_script(intent: Intent) -> Option<&'static str> {
    match intent {
        Intent::Stress => Some(STRESS_GUIDANCE),
        Intent::Diet => Some(DIET_GUIDANCE),
        Intent::Fitness => Some(FITNESS_GUIDANCE),
        Intent::Sleep => Some(SLEEP_GUIDANCE),
        Intent::Motivation => Some(MOTIVATION_GUIDANCE),
        Intent::Yes | Intent::No | Intent::General => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_topic_has_a_script() {
        for intent in Intent::TOPICS {
            assert!(guidance_script(intent).is_some(), "{intent} has no script");
        }
        assert!(guidance_script(Intent::Yes).is_none());
        assert!(guidance_script(Intent::No).is_none());
        assert!(guidance_script(Intent::General).is_none());
    }

    #[test]
    fn safety_script_carries_helpline() {
        assert!(SAFETY_SCRIPT.contains("AASRA – 91-9820466726"));
        assert!(SAFETY_SCRIPT.starts_with("🛑 **I’m really glad you told me this.**\n\n"));
        assert!(SAFETY_SCRIPT.ends_with("If you want, we can slow your breathing together."));
    }

    #[test]
    fn stress_script_ends_with_yes_no_prompt() {
        assert!(STRESS_GUIDANCE.ends_with("Would you like a **guided calming routine**?"));
    }

    #[test]
    fn breathing_routine_is_exact() {
        assert_eq!(
            BREATHING_ROUTINE,
            "🧘 **5-Minute Calming Routine**\n\n1️⃣ Inhale for 4 seconds\n2️⃣ Hold for 4 seconds\n3️⃣ Exhale slowly for 6 seconds\n4️⃣ Repeat 5 times\n\nPlace one hand on your chest while breathing.\n\nTell me how your body feels now."
        );
    }
}
